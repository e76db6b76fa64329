use serde::Serialize;

use super::Session;
use crate::content::{FUN_FACTS, NOTIFICATIONS, PUZZLES};
use crate::events::{GameOverReason, SessionEvent};
use crate::powerups::{PowerUpKind, TimedPowerUp};
use crate::rng::Stream;
use crate::symptoms::{
    ActiveNotification, ContextSwitchTask, DistractionBlob, HyperfocusEpisode, SymptomKind,
};
use crate::timers::TimerEvent;

/// What one symptom check decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "kind")]
pub enum CheckOutcome {
    /// Warm-up pending, accommodated, suppressed by a power-up or game over.
    Inert,
    Cooldown,
    RollFailed,
    /// A major symptom was showing and the overlap veto won.
    Vetoed,
    /// The rolled kind was already running; the trigger is spent.
    AlreadyActive(SymptomKind),
    /// The rolled kind had nothing to act on, such as a memory lapse
    /// before any row was submitted.
    NoEffect(SymptomKind),
    Activated(SymptomKind),
}

impl Session {
    pub(super) fn fire(&mut self, event: TimerEvent) {
        if self.state.is_game_over() {
            log::debug!("ignoring {event:?} after game over");
            return;
        }
        match event {
            TimerEvent::MasterTick => self.on_master_tick(),
            TimerEvent::SymptomCheck => {
                let interval = self
                    .config
                    .symptoms
                    .check_interval_ms(self.settings.intensity);
                self.arm(interval, TimerEvent::SymptomCheck);
                self.run_symptom_check();
            }
            TimerEvent::NotificationFlood => self.on_flood(),
            TimerEvent::DistractionSpawn => self.on_distraction_spawn(),
            TimerEvent::PowerUpSpawnCheck => self.on_power_up_spawn_check(),
            TimerEvent::SymptomExpire(kind) => self.end_timed_symptom(kind),
            TimerEvent::ContextSwitchTimeout => {
                if self.symptoms.context_switch.take().is_some() {
                    log::info!("context switch timed out");
                    self.emit(SessionEvent::SymptomEnded {
                        kind: SymptomKind::ContextSwitch,
                    });
                }
            }
            TimerEvent::NotificationExpire(id) => {
                self.clear_notification(id);
            }
            TimerEvent::DistractionHide => {
                if self.symptoms.distraction.take().is_some() {
                    log::debug!("distraction blob disappeared");
                    self.emit(SessionEvent::DistractionHidden);
                }
            }
            TimerEvent::PowerUpVanish => {
                if let Some(power_up) = self.power_ups.available.take() {
                    log::info!("{} power-up vanished uncollected", power_up.kind.label());
                    self.emit(SessionEvent::PowerUpVanished {
                        kind: power_up.kind,
                    });
                }
            }
            TimerEvent::PowerUpExpire(kind) => {
                if self.power_ups.is_active(kind) {
                    self.power_ups.active = None;
                    log::info!("{} power-up expired", kind.label());
                    self.emit(SessionEvent::PowerUpExpired { kind });
                }
            }
        }
    }

    fn on_master_tick(&mut self) {
        let multiplier = self.time_multiplier();
        let outcome = self.clock.tick(multiplier);
        if outcome.awakened {
            self.awaken();
        }
        if outcome.expired {
            self.finish(GameOverReason::OutOfTime);
            return;
        }
        self.arm(self.config.tick_ms, TimerEvent::MasterTick);
    }

    pub(super) fn awaken(&mut self) {
        let intensity = self.settings.intensity;
        log::info!(
            "symptoms awaken at {:.1}s (intensity {intensity})",
            self.clock.elapsed_secs()
        );
        let check = self.config.symptoms.check_interval_ms(intensity);
        let spawn = self.config.distraction.spawn_interval_ms(intensity);
        let power_up = self.config.power_ups.spawn_check_ms;
        let flood = self.config.symptoms.flood_interval_ms;
        self.arm(check, TimerEvent::SymptomCheck);
        self.arm(spawn, TimerEvent::DistractionSpawn);
        self.arm(power_up, TimerEvent::PowerUpSpawnCheck);
        self.arm(flood, TimerEvent::NotificationFlood);
        self.emit(SessionEvent::SymptomsAwakened);
    }

    /// Symptoms may only start once warmed up, while not accommodated and
    /// while no `remove_distraction` power-up runs.
    fn symptoms_enabled(&self) -> bool {
        self.clock.symptoms_active()
            && !self.settings.accommodated
            && !self.power_ups.suppresses_symptoms()
            && !self.state.is_game_over()
    }

    /// One trigger attempt, outside the regular cadence if called directly.
    pub fn run_symptom_check(&mut self) -> CheckOutcome {
        if !self.symptoms_enabled() {
            log::debug!("symptom check inert");
            return CheckOutcome::Inert;
        }
        let intensity = self.settings.intensity;
        let cooldown = self.config.symptoms.cooldown_ms(intensity);
        if let Some(last) = self.symptoms.last_symptom_at_ms
            && self.now_ms < last.saturating_add(cooldown)
        {
            log::debug!(
                "symptom on cooldown ({}ms left)",
                last.saturating_add(cooldown) - self.now_ms
            );
            return CheckOutcome::Cooldown;
        }

        let roll = self.rng.roll(Stream::Symptom);
        let chance = self.config.symptoms.trigger_chance(intensity);
        log::debug!("symptom roll {roll:.3} against {chance:.2}");
        if roll >= chance {
            return CheckOutcome::RollFailed;
        }
        self.symptoms.last_symptom_at_ms = Some(self.now_ms);

        if self.symptoms.major_active() {
            let veto = self.rng.roll(Stream::Symptom);
            if veto < self.config.symptoms.major_overlap_veto {
                log::debug!("major symptom showing, vetoed ({veto:.3})");
                return CheckOutcome::Vetoed;
            }
        }

        let kind = SymptomKind::from_roll(self.rng.roll(Stream::Symptom));
        if self.symptoms.is_active(kind) {
            log::debug!("{} already active, trigger spent", kind.label());
            return CheckOutcome::AlreadyActive(kind);
        }
        if self.activate_symptom(kind) {
            CheckOutcome::Activated(kind)
        } else {
            CheckOutcome::NoEffect(kind)
        }
    }

    /// Start `kind` right away, skipping cadence, cooldown and odds.
    ///
    /// Returns `false` if the game is over, the kind is already running, or
    /// it had nothing to act on (a memory lapse with no submitted rows).
    pub fn inject_symptom(&mut self, kind: SymptomKind) -> bool {
        if self.state.is_game_over() || self.symptoms.is_active(kind) {
            return false;
        }
        self.activate_symptom(kind)
    }

    fn activate_symptom(&mut self, kind: SymptomKind) -> bool {
        let intensity = self.settings.intensity;
        let durations = self.config.symptoms.durations;
        match kind {
            SymptomKind::Freeze | SymptomKind::ColorDisruption | SymptomKind::TimeDistortion => {
                let spec = match kind {
                    SymptomKind::Freeze => durations.freeze,
                    SymptomKind::ColorDisruption => durations.color_disruption,
                    _ => durations.time_distortion,
                };
                let duration = spec.resolve(intensity, self.rng.roll(Stream::Symptom));
                self.symptoms.set_timed_flag(kind, true);
                self.arm(duration, TimerEvent::SymptomExpire(kind));
                log::info!("{} for {duration}ms", kind.label());
            }
            SymptomKind::MemoryLapse => {
                let Some(word) = self.state.forget_last_guess() else {
                    log::debug!("memory lapse with no rows to forget");
                    return false;
                };
                let duration = durations
                    .memory_lapse
                    .resolve(intensity, self.rng.roll(Stream::Symptom));
                self.symptoms.memory_lapse_visible = true;
                self.arm(duration, TimerEvent::SymptomExpire(kind));
                log::info!("memory lapse forgot {word}");
                self.emit(SessionEvent::GuessForgotten { word });
            }
            SymptomKind::Notification => {
                let idx = self.rng.pick(Stream::Symptom, NOTIFICATIONS.len());
                self.show_notification(idx);
            }
            SymptomKind::Hyperfocus => {
                let idx = self.rng.pick(Stream::Symptom, FUN_FACTS.len());
                let wait = self.config.symptoms.hyperfocus_min_wait_ms;
                self.symptoms.hyperfocus = Some(HyperfocusEpisode {
                    fact: FUN_FACTS[idx],
                    opened_at_ms: self.now_ms,
                    unlock_at_ms: self.now_ms.saturating_add(wait),
                });
                log::info!("hyperfocus episode opened");
            }
            SymptomKind::ContextSwitch => {
                let idx = self.rng.pick(Stream::Symptom, PUZZLES.len());
                let timeout = self.config.symptoms.context_switch_timeout_ms;
                self.symptoms.context_switch = Some(ContextSwitchTask {
                    puzzle: PUZZLES[idx],
                    opened_at_ms: self.now_ms,
                    deadline_ms: self.now_ms.saturating_add(timeout),
                });
                self.arm(timeout, TimerEvent::ContextSwitchTimeout);
                log::info!("context switch: {}", PUZZLES[idx].question);
            }
        }
        self.emit(SessionEvent::SymptomStarted { kind });
        true
    }

    fn end_timed_symptom(&mut self, kind: SymptomKind) {
        if !self.symptoms.is_active(kind) {
            return;
        }
        self.symptoms.set_timed_flag(kind, false);
        log::info!("{} ended", kind.label());
        self.emit(SessionEvent::SymptomEnded { kind });
    }

    fn show_notification(&mut self, idx: usize) {
        let template = NOTIFICATIONS[idx.min(NOTIFICATIONS.len() - 1)];
        let id = self.next_notification_id;
        self.next_notification_id = self.next_notification_id.wrapping_add(1);
        let ttl = self.config.symptoms.notification_ttl_ms;
        self.symptoms.notifications.push(ActiveNotification::new(
            id,
            template,
            self.now_ms.saturating_add(ttl),
        ));
        self.arm(ttl, TimerEvent::NotificationExpire(id));
        self.emit(SessionEvent::NotificationShown {
            id,
            title: template.title,
            body: template.body,
        });
    }

    pub(super) fn clear_notification(&mut self, id: u64) -> bool {
        let before = self.symptoms.notifications.len();
        self.symptoms.notifications.retain(|n| n.id != id);
        if self.symptoms.notifications.len() == before {
            return false;
        }
        self.timers.cancel_kind(TimerEvent::NotificationExpire(id));
        self.emit(SessionEvent::NotificationCleared { id });
        true
    }

    fn on_flood(&mut self) {
        self.arm(
            self.config.symptoms.flood_interval_ms,
            TimerEvent::NotificationFlood,
        );
        if !self.symptoms_enabled() || !self.config.symptoms.flood_enabled(self.settings.intensity)
        {
            return;
        }
        let max_burst = usize::from(self.config.symptoms.flood_max_burst);
        let burst = 1 + self.rng.pick(Stream::Symptom, max_burst);
        log::debug!("notification flood of {burst}");
        for _ in 0..burst {
            let idx = self.rng.pick(Stream::Symptom, NOTIFICATIONS.len());
            self.show_notification(idx);
        }
    }

    fn on_distraction_spawn(&mut self) {
        let interval = self
            .config
            .distraction
            .spawn_interval_ms(self.settings.intensity);
        self.arm(interval, TimerEvent::DistractionSpawn);
        if !self.symptoms_enabled() || self.symptoms.distraction.is_some() {
            return;
        }
        let top_pct = self.rng.roll(Stream::Distraction).mul_add(60.0, 20.0);
        let left_pct = self.rng.roll(Stream::Distraction).mul_add(70.0, 15.0);
        let visible = self.config.distraction.visible_ms;
        self.symptoms.distraction = Some(DistractionBlob {
            top_pct,
            left_pct,
            spawned_at_ms: self.now_ms,
            hides_at_ms: self.now_ms.saturating_add(visible),
        });
        self.arm(visible, TimerEvent::DistractionHide);
        log::debug!("distraction blob at {top_pct:.0}% / {left_pct:.0}%");
        self.emit(SessionEvent::DistractionSpawned { top_pct, left_pct });
    }

    fn on_power_up_spawn_check(&mut self) {
        let cfg = &self.config.power_ups;
        let (check, chance, visible) = (cfg.spawn_check_ms, cfg.spawn_chance, cfg.visible_ms);
        self.arm(check, TimerEvent::PowerUpSpawnCheck);
        if !self.clock.symptoms_active() || !self.power_ups.can_spawn() {
            return;
        }
        if self.rng.roll(Stream::PowerUp) >= chance {
            return;
        }
        let kind = PowerUpKind::ALL[self.rng.pick(Stream::PowerUp, PowerUpKind::ALL.len())];
        self.power_ups.available = Some(TimedPowerUp {
            kind,
            until_ms: self.now_ms.saturating_add(visible),
        });
        self.arm(visible, TimerEvent::PowerUpVanish);
        log::info!("{} power-up spawned", kind.label());
        self.emit(SessionEvent::PowerUpSpawned { kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, Settings};
    use crate::rng::ScriptedRolls;
    use crate::words::WordSource;

    fn session(rolls: ScriptedRolls) -> Session {
        let words = WordSource::new(["CRANE"], Vec::<&str>::new()).unwrap();
        let mut session =
            Session::new(GameConfig::default(), Settings::default(), words, rolls).unwrap();
        session.advance(20_000);
        assert!(session.clock().symptoms_active());
        session
    }

    #[test]
    fn check_is_inert_before_warmup() {
        let words = WordSource::new(["CRANE"], Vec::<&str>::new()).unwrap();
        let mut session = Session::new(
            GameConfig::default(),
            Settings::default(),
            words,
            ScriptedRolls::constant(0.0),
        )
        .unwrap();
        assert_eq!(session.run_symptom_check(), CheckOutcome::Inert);
    }

    #[test]
    fn cooldown_allows_one_activation() {
        // trigger, kind (freeze), jitter, then a second trigger that never gets rolled
        let rolls = ScriptedRolls::constant(0.99).with(Stream::Symptom, &[0.0, 0.0, 0.0, 0.0]);
        let mut session = session(rolls);
        assert_eq!(
            session.run_symptom_check(),
            CheckOutcome::Activated(SymptomKind::Freeze)
        );
        assert_eq!(session.run_symptom_check(), CheckOutcome::Cooldown);
    }

    #[test]
    fn failed_roll_does_not_start_cooldown() {
        let rolls = ScriptedRolls::constant(0.99);
        let mut session = session(rolls);
        assert_eq!(session.run_symptom_check(), CheckOutcome::RollFailed);
        assert_eq!(session.symptoms().last_symptom_at_ms, None);
    }

    #[test]
    fn overlap_veto_applies_while_major_symptom_shows() {
        // jitter for the injected symptom, trigger, veto
        let rolls = ScriptedRolls::constant(0.99).with(Stream::Symptom, &[0.0, 0.0, 0.5]);
        let mut session = session(rolls);
        assert!(session.inject_symptom(SymptomKind::ColorDisruption));
        assert_eq!(session.run_symptom_check(), CheckOutcome::Vetoed);
    }

    #[test]
    fn rolling_an_active_kind_spends_the_trigger() {
        // fun fact pick, trigger, kind
        let rolls = ScriptedRolls::constant(0.99).with(Stream::Symptom, &[0.0, 0.0, 0.5]);
        let mut session = session(rolls);
        assert!(session.inject_symptom(SymptomKind::Hyperfocus));
        // hyperfocus is not major, so there is no veto roll
        assert_eq!(
            session.run_symptom_check(),
            CheckOutcome::AlreadyActive(SymptomKind::Hyperfocus)
        );
    }

    #[test]
    fn time_distortion_doubles_then_restores() {
        let mut session = session(ScriptedRolls::constant(0.0));
        session.set_accommodated(true);
        assert!(session.inject_symptom(SymptomKind::TimeDistortion));
        assert!((session.time_multiplier() - 2.0).abs() < f64::EPSILON);
        // intensity 3: 4000 + 600 + 0 jitter
        session.advance(4_599);
        assert!(session.symptoms().time_distorted);
        session.advance(1);
        assert!(!session.symptoms().time_distorted);
        assert!((session.time_multiplier() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn context_switch_times_out() {
        let mut session = session(ScriptedRolls::constant(0.0));
        session.set_accommodated(true);
        assert!(session.inject_symptom(SymptomKind::ContextSwitch));
        assert!(session.is_input_blocked());
        session.advance(7_000);
        assert!(session.symptoms().context_switch.is_none());
        assert!(!session.is_input_blocked());
    }

    #[test]
    fn power_up_spawns_and_vanishes() {
        let cfg = GameConfig {
            power_ups: crate::config::PowerUpConfig {
                spawn_chance: 1.0,
                ..Default::default()
            },
            ..GameConfig::default()
        };
        let words = WordSource::new(["CRANE"], Vec::<&str>::new()).unwrap();
        let settings = Settings {
            accommodated: true,
            ..Settings::default()
        };
        let mut session =
            Session::new(cfg, settings, words, ScriptedRolls::constant(0.0)).unwrap();
        session.advance(30_000);
        let spawned = session.power_ups().available.expect("power-up spawned");
        assert_eq!(spawned.kind, PowerUpKind::SlowTime);
        assert_eq!(spawned.until_ms, 42_000);
        session.advance(12_000);
        assert!(session.power_ups().available.is_none());
    }
}
