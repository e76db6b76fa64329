//! A single game session: board, master timer, symptom scheduler and
//! power-ups driven by one virtual millisecond clock.
mod actions;
mod input;
mod scheduler;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

pub use actions::ActionError;
pub use input::{GuessOutcome, GuessRejection, PendingGuess};
pub use scheduler::CheckOutcome;

use crate::clock::MasterTimer;
use crate::config::{ConfigError, GameConfig, Intensity, Settings};
use crate::evaluate::{LetterStatus, letter_hints};
use crate::events::{GameOverReason, SessionEvent, Toast, ToastLevel};
use crate::powerups::{PowerUpKind, PowerUpState};
use crate::rng::{RandomSource, RngBundle};
use crate::state::GameState;
use crate::summary::{GameSummary, share_text};
use crate::symptoms::SymptomState;
use crate::timers::{TimerEvent, TimerQueue};
use crate::words::WordSource;

/// Owns every piece of mutable game state plus the timers that mutate it.
///
/// Time only moves through [`Session::advance`]. Timers fire in due order and
/// each one re-checks the session before touching it, so a reset or a game
/// over leaves nothing that can reach the fresh state.
pub struct Session {
    config: GameConfig,
    settings: Settings,
    words: WordSource,
    rng: Box<dyn RandomSource + Send>,
    seed: Option<u64>,
    state: GameState,
    clock: MasterTimer,
    symptoms: SymptomState,
    power_ups: PowerUpState,
    timers: TimerQueue,
    now_ms: u64,
    generation: u64,
    in_flight: Option<u64>,
    next_ticket: u64,
    next_notification_id: u64,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Default tuning with the embedded word list and a seeded RNG bundle.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    #[must_use]
    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        Self::assemble(
            GameConfig::default(),
            settings,
            WordSource::embedded(),
            Box::new(RngBundle::from_user_seed(seed)),
            Some(seed),
        )
    }

    /// Seeded session with custom tuning.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `config` fails validation.
    pub fn from_seed(config: GameConfig, settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(
            config,
            settings,
            WordSource::embedded(),
            Box::new(RngBundle::from_user_seed(seed)),
            Some(seed),
        ))
    }

    /// Fully injected session, typically with a scripted random source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `config` fails validation.
    pub fn new<R>(
        config: GameConfig,
        settings: Settings,
        words: WordSource,
        rng: R,
    ) -> Result<Self, ConfigError>
    where
        R: RandomSource + Send + 'static,
    {
        config.validate()?;
        Ok(Self::assemble(config, settings, words, Box::new(rng), None))
    }

    fn assemble(
        config: GameConfig,
        settings: Settings,
        words: WordSource,
        mut rng: Box<dyn RandomSource + Send>,
        seed: Option<u64>,
    ) -> Self {
        let target = words.pick_target(rng.as_mut());
        let clock = MasterTimer::new(&config);
        let mut session = Self {
            config,
            settings,
            words,
            rng,
            seed,
            state: GameState::new(target),
            clock,
            symptoms: SymptomState::default(),
            power_ups: PowerUpState::default(),
            timers: TimerQueue::new(),
            now_ms: 0,
            generation: 0,
            in_flight: None,
            next_ticket: 0,
            next_notification_id: 0,
            events: Vec::new(),
        };
        session.start_round();
        session
    }

    /// Start a new game: fresh target, cleared board, flags and timers.
    ///
    /// Settings survive; the virtual clock keeps running.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.timers.cancel_all();
        let target = self.words.pick_target(self.rng.as_mut());
        self.state = GameState::new(target);
        self.clock = MasterTimer::new(&self.config);
        self.symptoms = SymptomState::default();
        self.power_ups = PowerUpState::default();
        self.in_flight = None;
        self.start_round();
    }

    fn start_round(&mut self) {
        self.arm(self.config.tick_ms, TimerEvent::MasterTick);
        log::info!(
            "new game (generation {}, intensity {}, accommodated {})",
            self.generation,
            self.settings.intensity,
            self.settings.accommodated
        );
        self.emit(SessionEvent::NewGame {
            generation: self.generation,
        });
    }

    /// Move virtual time forward, firing every timer that falls due.
    pub fn advance(&mut self, ms: u64) {
        let target = self.now_ms.saturating_add(ms);
        while let Some(timer) = self.timers.pop_due(target) {
            self.now_ms = self.now_ms.max(timer.due_ms);
            if timer.generation != self.generation {
                log::warn!(
                    "dropping {:?} armed in generation {} (now {})",
                    timer.event,
                    timer.generation,
                    self.generation
                );
                continue;
            }
            self.fire(timer.event);
        }
        self.now_ms = target;
    }

    /// Advance until the clock reads `at_ms`; earlier instants are ignored.
    pub fn advance_to(&mut self, at_ms: u64) {
        self.advance(at_ms.saturating_sub(self.now_ms));
    }

    /// Run until the game ends or `limit_ms` of virtual time passes.
    pub fn run_until_over(&mut self, limit_ms: u64) {
        let deadline = self.now_ms.saturating_add(limit_ms);
        while !self.state.is_game_over() && self.now_ms < deadline {
            let step = self
                .timers
                .next_due()
                .map_or(deadline, |due| due.min(deadline))
                .saturating_sub(self.now_ms)
                .max(1);
            self.advance(step);
        }
    }

    pub(crate) fn arm(&mut self, delay_ms: u64, event: TimerEvent) {
        let due = self.now_ms.saturating_add(delay_ms);
        self.timers.schedule(due, event, self.generation);
    }

    pub(crate) fn emit(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    pub(crate) fn toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.emit(SessionEvent::Toast(Toast::new(level, message)));
    }

    /// Terminal transition; idempotent.
    pub(crate) fn finish(&mut self, reason: GameOverReason) {
        if reason == GameOverReason::OutOfTime {
            self.state.end_without_win();
        }
        self.state.clear_buffer();
        self.clock.stop();
        self.timers.cancel_all();
        self.symptoms.clear_transient();
        self.power_ups.clear();
        self.in_flight = None;

        let won = self.state.is_winner();
        log::info!(
            "game over ({reason:?}) after {} guesses, won: {won}",
            self.state.guesses().len()
        );
        if won {
            self.toast(ToastLevel::Success, "You won!");
        } else {
            let message = format!("The word was {}", self.state.target_word());
            self.toast(ToastLevel::Info, message);
        }
        self.emit(SessionEvent::GameOver { won, reason });
    }

    /// Current factor applied to each master tick.
    ///
    /// Derived from live flags, so it returns to 1 as soon as the symptom or
    /// power-up behind it ends.
    #[must_use]
    pub fn time_multiplier(&self) -> f64 {
        let distortion = if self.symptoms.time_distorted {
            self.config.symptoms.time_distortion_multiplier
        } else {
            1.0
        };
        distortion * self.power_ups.time_factor(&self.config.power_ups)
    }

    /// Whether letter, backspace and submit are currently ignored.
    #[must_use]
    pub fn is_input_blocked(&self) -> bool {
        self.symptoms.blocks_input() || self.in_flight.is_some()
    }

    /// Events since the previous drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Best status seen per letter, for keyboard tinting.
    #[must_use]
    pub fn letter_hints(&self) -> BTreeMap<char, LetterStatus> {
        letter_hints(self.state.rows().map(|(word, statuses)| (word.as_str(), statuses)))
    }

    /// Distinct target letters while `reveal_letters` runs, otherwise empty.
    #[must_use]
    pub fn revealed_letters(&self) -> BTreeSet<char> {
        if self.power_ups.is_active(PowerUpKind::RevealLetters) {
            self.state.target_word().letters().collect()
        } else {
            BTreeSet::new()
        }
    }

    /// End-of-game summary; `None` while the game is running.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.state
            .is_game_over()
            .then(|| GameSummary::from_game(&self.state, &self.clock))
    }

    /// Emoji grid for sharing a finished game.
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.state
            .is_game_over()
            .then(|| share_text(self.state.statuses()))
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
        log::info!(
            "settings changed: intensity {}, accommodated {}",
            settings.intensity,
            settings.accommodated
        );
    }

    /// Takes effect at the next scheduled check.
    pub fn set_intensity(&mut self, intensity: Intensity) {
        self.set_settings(Settings {
            intensity,
            ..self.settings
        });
    }

    pub fn set_accommodated(&mut self, accommodated: bool) {
        self.set_settings(Settings {
            accommodated,
            ..self.settings
        });
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn symptoms(&self) -> &SymptomState {
        &self.symptoms
    }

    #[must_use]
    pub const fn power_ups(&self) -> &PowerUpState {
        &self.power_ups
    }

    #[must_use]
    pub const fn clock(&self) -> &MasterTimer {
        &self.clock
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn settings(&self) -> Settings {
        self.settings
    }

    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Bumped by every reset.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// User seed when the session was built from one.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub const fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    #[must_use]
    pub const fn lookup_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("now_ms", &self.now_ms)
            .field("generation", &self.generation)
            .field("settings", &self.settings)
            .field("state", &self.state)
            .field("clock", &self.clock)
            .field("symptoms", &self.symptoms)
            .field("power_ups", &self.power_ups)
            .field("pending_timers", &self.timers.len())
            .finish_non_exhaustive()
    }
}
