//! Centralized rules and tuning constants for ADHD Wordle game logic.
//!
//! Board shape is fixed in code. Timing defaults live here so that
//! `GameConfig` and the tests agree on a single source of truth.

// Board shape --------------------------------------------------------------
pub const WORD_LENGTH: usize = 5;
pub const MAX_ATTEMPTS: usize = 6;

// Master timer -------------------------------------------------------------
pub(crate) const GAME_DURATION_SECS: f64 = 300.0;
pub(crate) const WARMUP_SECS: f64 = 20.0;
pub(crate) const TICK_MS: u64 = 1_000;

// Intensity ----------------------------------------------------------------
pub const MAX_INTENSITY: u8 = 5;
pub(crate) const DEFAULT_INTENSITY: u8 = 3;

// Symptom scheduler --------------------------------------------------------
pub(crate) const BASE_CHECK_INTERVAL_MS: u64 = 8_800;
pub(crate) const CHECK_INTERVAL_STEP_MS: u64 = 1_300;
pub(crate) const BASE_COOLDOWN_MS: u64 = 12_000;
pub(crate) const COOLDOWN_STEP_MS: u64 = 1_300;
pub(crate) const MIN_COOLDOWN_MS: u64 = 5_000;
pub(crate) const BASE_TRIGGER_CHANCE: f64 = 0.15;
pub(crate) const TRIGGER_CHANCE_STEP: f64 = 0.05;
pub(crate) const MAJOR_OVERLAP_VETO: f64 = 0.75;
pub(crate) const TIME_DISTORTION_MULTIPLIER: f64 = 2.0;
pub(crate) const HYPERFOCUS_MIN_WAIT_MS: u64 = 3_000;
pub(crate) const CONTEXT_SWITCH_TIMEOUT_MS: u64 = 7_000;
pub(crate) const NOTIFICATION_TTL_MS: u64 = 3_000;
pub(crate) const FLOOD_MIN_INTENSITY: u8 = 3;
pub(crate) const FLOOD_INTERVAL_MS: u64 = 9_000;
pub(crate) const FLOOD_MAX_BURST: u8 = 3;

// Power-ups ----------------------------------------------------------------
pub(crate) const POWER_UP_SPAWN_CHECK_MS: u64 = 10_000;
pub(crate) const POWER_UP_SPAWN_CHANCE: f64 = 0.3;
pub(crate) const POWER_UP_VISIBLE_MS: u64 = 12_000;
pub(crate) const SLOW_TIME_MS: u64 = 15_000;
pub(crate) const SLOW_TIME_MULTIPLIER: f64 = 0.5;
pub(crate) const REVEAL_LETTERS_MS: u64 = 12_000;
pub(crate) const REMOVE_DISTRACTION_MS: u64 = 15_000;
pub(crate) const REMOVE_DISTRACTION_EXTRA_COOLDOWN_MS: u64 = 8_000;

// Distraction blob ---------------------------------------------------------
pub(crate) const DISTRACTION_BASE_SPAWN_MS: u64 = 15_000;
pub(crate) const DISTRACTION_VISIBLE_MS: u64 = 5_000;
pub(crate) const DISTRACTION_PENALTY_SECS: f64 = 5.0;
pub(crate) const DISTRACTION_SPAWN_FACTOR_BASE: f64 = 1.2;
pub(crate) const DISTRACTION_SPAWN_FACTOR_STEP: f64 = 0.15;

// Share text ---------------------------------------------------------------
pub(crate) const SHARE_TITLE: &str = "ADHD Wordle";
pub(crate) const SHARE_URL: &str = "https://wordleadhd.netlify.app/";
