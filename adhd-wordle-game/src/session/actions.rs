use serde::Serialize;
use thiserror::Error;

use super::Session;
use crate::events::{GameOverReason, SessionEvent, ToastLevel};
use crate::powerups::{PowerUpKind, TimedPowerUp};
use crate::symptoms::SymptomKind;
use crate::timers::TimerEvent;

/// Player actions that were not possible at the moment they were made.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case", tag = "error")]
pub enum ActionError {
    #[error("the game is over")]
    GameOver,
    #[error("no power-up is available to collect")]
    NoPowerUpAvailable,
    #[error("there is no distraction to click")]
    NoDistraction,
    #[error("no context-switch task is open")]
    NoContextSwitch,
    #[error("no hyperfocus episode is open")]
    NoHyperfocus,
    #[error("still absorbing the fact ({remaining_ms}ms left)")]
    HyperfocusLocked { remaining_ms: u64 },
    #[error("notification {id} is not showing")]
    UnknownNotification { id: u64 },
}

impl Session {
    fn action_gate(&self) -> Result<(), ActionError> {
        if self.state.is_game_over() {
            return Err(ActionError::GameOver);
        }
        Ok(())
    }

    /// Collect the available power-up and start its effect.
    ///
    /// # Errors
    ///
    /// Fails when the game is over or nothing is available.
    pub fn activate_power_up(&mut self) -> Result<PowerUpKind, ActionError> {
        self.action_gate()?;
        let Some(available) = self.power_ups.available.take() else {
            return Err(ActionError::NoPowerUpAvailable);
        };
        let kind = available.kind;
        self.timers.cancel_kind(TimerEvent::PowerUpVanish);
        let duration = kind.duration_ms(&self.config.power_ups);
        self.power_ups.active = Some(TimedPowerUp {
            kind,
            until_ms: self.now_ms.saturating_add(duration),
        });
        self.arm(duration, TimerEvent::PowerUpExpire(kind));
        log::info!("{} power-up active for {duration}ms", kind.label());

        if kind == PowerUpKind::RemoveDistraction {
            self.clear_all_symptoms();
            let extra = self.config.power_ups.remove_distraction_extra_cooldown_ms;
            self.symptoms.last_symptom_at_ms = Some(self.now_ms.saturating_add(extra));
        }
        self.emit(SessionEvent::PowerUpActivated { kind });
        Ok(kind)
    }

    /// Drop every showing symptom and its pending expiry.
    fn clear_all_symptoms(&mut self) {
        let ended: Vec<SymptomKind> = self.symptoms.active_kinds().collect();
        let had_distraction = self.symptoms.distraction.is_some();
        let notifications: Vec<u64> = self.symptoms.notifications.iter().map(|n| n.id).collect();
        self.symptoms.clear_transient();
        self.timers.cancel_where(|event| {
            matches!(
                event,
                TimerEvent::SymptomExpire(_)
                    | TimerEvent::ContextSwitchTimeout
                    | TimerEvent::NotificationExpire(_)
                    | TimerEvent::DistractionHide
            )
        });
        for kind in ended {
            self.emit(SessionEvent::SymptomEnded { kind });
        }
        for id in notifications {
            self.emit(SessionEvent::NotificationCleared { id });
        }
        if had_distraction {
            self.emit(SessionEvent::DistractionHidden);
        }
    }

    /// Click the distraction blob: lose `penalty_secs` of game time.
    ///
    /// # Errors
    ///
    /// Fails when the game is over or no blob is showing.
    pub fn click_distraction(&mut self) -> Result<f64, ActionError> {
        self.action_gate()?;
        if self.symptoms.distraction.take().is_none() {
            return Err(ActionError::NoDistraction);
        }
        self.timers.cancel_kind(TimerEvent::DistractionHide);
        let penalty = self.config.distraction.penalty_secs;
        let outcome = self.clock.penalize(penalty);
        log::info!("distraction clicked, lost {penalty:.0}s");
        self.emit(SessionEvent::Shake);
        self.toast(
            ToastLevel::Error,
            format!("Distraction! You lost {penalty:.0} seconds."),
        );
        self.emit(SessionEvent::DistractionClicked {
            penalty_secs: penalty,
        });
        if outcome.expired {
            self.finish(GameOverReason::OutOfTime);
        }
        Ok(penalty)
    }

    /// Answer the open context-switch puzzle. Returns whether it was right;
    /// a right answer closes the task.
    ///
    /// # Errors
    ///
    /// Fails when the game is over or no task is open.
    pub fn answer_context_switch(&mut self, option: &str) -> Result<bool, ActionError> {
        self.action_gate()?;
        let Some(task) = &self.symptoms.context_switch else {
            return Err(ActionError::NoContextSwitch);
        };
        if !task.puzzle.is_answer(option) {
            log::debug!("wrong context-switch answer `{option}`");
            return Ok(false);
        }
        self.symptoms.context_switch = None;
        self.timers.cancel_kind(TimerEvent::ContextSwitchTimeout);
        log::info!("context switch solved");
        self.emit(SessionEvent::SymptomEnded {
            kind: SymptomKind::ContextSwitch,
        });
        Ok(true)
    }

    /// Close the hyperfocus episode once its minimum wait has passed.
    ///
    /// # Errors
    ///
    /// `HyperfocusLocked` before the wait elapses.
    pub fn dismiss_hyperfocus(&mut self) -> Result<(), ActionError> {
        self.action_gate()?;
        let Some(episode) = &self.symptoms.hyperfocus else {
            return Err(ActionError::NoHyperfocus);
        };
        if self.now_ms < episode.unlock_at_ms {
            return Err(ActionError::HyperfocusLocked {
                remaining_ms: episode.unlock_at_ms - self.now_ms,
            });
        }
        self.symptoms.hyperfocus = None;
        log::info!("hyperfocus dismissed");
        self.emit(SessionEvent::SymptomEnded {
            kind: SymptomKind::Hyperfocus,
        });
        Ok(())
    }

    /// # Errors
    ///
    /// Fails when no notification with `id` is showing.
    pub fn dismiss_notification(&mut self, id: u64) -> Result<(), ActionError> {
        self.action_gate()?;
        if self.clear_notification(id) {
            Ok(())
        } else {
            Err(ActionError::UnknownNotification { id })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, PowerUpConfig, Settings};
    use crate::rng::ScriptedRolls;
    use crate::words::WordSource;

    fn warmed(cfg: GameConfig) -> Session {
        let words = WordSource::new(["CRANE"], Vec::<&str>::new()).unwrap();
        let mut session =
            Session::new(cfg, Settings::default(), words, ScriptedRolls::constant(0.0)).unwrap();
        session.advance(20_000);
        session
    }

    fn always_spawn() -> GameConfig {
        GameConfig {
            power_ups: PowerUpConfig {
                spawn_chance: 1.0,
                ..PowerUpConfig::default()
            },
            ..GameConfig::default()
        }
    }

    #[test]
    fn hyperfocus_unlocks_after_minimum_wait() {
        let mut session = warmed(GameConfig::default());
        assert!(session.inject_symptom(SymptomKind::Hyperfocus));
        session.advance(1_000);
        assert_eq!(
            session.dismiss_hyperfocus(),
            Err(ActionError::HyperfocusLocked {
                remaining_ms: 2_000
            })
        );
        session.advance(2_000);
        assert_eq!(session.dismiss_hyperfocus(), Ok(()));
        assert_eq!(session.dismiss_hyperfocus(), Err(ActionError::NoHyperfocus));
    }

    #[test]
    fn context_switch_needs_the_right_answer() {
        let mut session = warmed(GameConfig::default());
        assert!(session.inject_symptom(SymptomKind::ContextSwitch));
        // constant 0.0 picks the first puzzle, 7 + 5
        assert_eq!(session.answer_context_switch("11"), Ok(false));
        assert!(session.is_input_blocked());
        assert_eq!(session.answer_context_switch("12"), Ok(true));
        assert!(!session.is_input_blocked());
        assert!(!session.timers().contains(TimerEvent::ContextSwitchTimeout));
    }

    #[test]
    fn notifications_can_be_dismissed_once() {
        let mut session = warmed(GameConfig::default());
        assert!(session.inject_symptom(SymptomKind::Notification));
        let id = session.symptoms().notifications[0].id;
        assert!(!session.is_input_blocked());
        assert_eq!(session.dismiss_notification(id), Ok(()));
        assert_eq!(
            session.dismiss_notification(id),
            Err(ActionError::UnknownNotification { id })
        );
    }

    #[test]
    fn remove_distraction_clears_and_pushes_cooldown() {
        let mut session = warmed(always_spawn());
        assert!(session.inject_symptom(SymptomKind::Freeze));
        // spawn check fires 10s after warm-up; constant 0.0 picks slow time,
        // so force the kind we want
        session.power_ups.available = Some(TimedPowerUp {
            kind: PowerUpKind::RemoveDistraction,
            until_ms: session.now_ms() + 12_000,
        });
        let now = session.now_ms();
        assert_eq!(
            session.activate_power_up(),
            Ok(PowerUpKind::RemoveDistraction)
        );
        assert!(!session.symptoms().keyboard_frozen);
        assert_eq!(session.symptoms().last_symptom_at_ms, Some(now + 8_000));
        assert_eq!(
            session.run_symptom_check(),
            super::super::CheckOutcome::Inert
        );
        session.advance(15_000);
        assert!(session.power_ups().active.is_none());
    }

    #[test]
    fn slow_time_halves_the_clock_then_restores() {
        let mut session = warmed(always_spawn());
        session.set_accommodated(true);
        session.advance(10_000);
        assert_eq!(session.activate_power_up(), Ok(PowerUpKind::SlowTime));
        assert!((session.time_multiplier() - 0.5).abs() < f64::EPSILON);
        let before = session.clock().elapsed_secs();
        session.advance(4_000);
        assert!((session.clock().elapsed_secs() - before - 2.0).abs() < 1e-9);
        session.advance(11_000);
        assert!((session.time_multiplier() - 1.0).abs() < f64::EPSILON);
        assert_eq!(session.activate_power_up(), Err(ActionError::NoPowerUpAvailable));
    }

    #[test]
    fn clicking_the_blob_costs_time() {
        let mut session = warmed(GameConfig::default());
        assert_eq!(session.click_distraction(), Err(ActionError::NoDistraction));
        // intensity 3 spawns the blob 11.25s after warm-up
        session.advance(11_250);
        assert!(session.symptoms().distraction.is_some());
        let before = session.clock().elapsed_secs();
        assert_eq!(session.click_distraction(), Ok(5.0));
        assert!((session.clock().elapsed_secs() - before - 5.0).abs() < 1e-9);
        assert!(session.symptoms().distraction.is_none());
    }
}
