//! Tuning for the master timer, the symptom scheduler, power-ups and the
//! distraction blob, plus the player-facing settings.
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    BASE_CHECK_INTERVAL_MS, BASE_COOLDOWN_MS, BASE_TRIGGER_CHANCE, CHECK_INTERVAL_STEP_MS,
    CONTEXT_SWITCH_TIMEOUT_MS, COOLDOWN_STEP_MS, DEFAULT_INTENSITY, DISTRACTION_BASE_SPAWN_MS,
    DISTRACTION_PENALTY_SECS, DISTRACTION_SPAWN_FACTOR_BASE, DISTRACTION_SPAWN_FACTOR_STEP,
    DISTRACTION_VISIBLE_MS, FLOOD_INTERVAL_MS, FLOOD_MAX_BURST, FLOOD_MIN_INTENSITY,
    GAME_DURATION_SECS, HYPERFOCUS_MIN_WAIT_MS, MAJOR_OVERLAP_VETO, MAX_INTENSITY,
    MIN_COOLDOWN_MS, NOTIFICATION_TTL_MS, POWER_UP_SPAWN_CHANCE, POWER_UP_SPAWN_CHECK_MS,
    POWER_UP_VISIBLE_MS, REMOVE_DISTRACTION_EXTRA_COOLDOWN_MS, REMOVE_DISTRACTION_MS,
    REVEAL_LETTERS_MS, SLOW_TIME_MS, SLOW_TIME_MULTIPLIER, TICK_MS, TIME_DISTORTION_MULTIPLIER,
    TRIGGER_CHANCE_STEP, WARMUP_SECS,
};
use crate::numbers::scale_millis;

/// Symptom difficulty knob, `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("intensity {0} is above the maximum of {MAX_INTENSITY}")]
pub struct IntensityError(pub u8);

impl Intensity {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(MAX_INTENSITY);

    /// # Errors
    ///
    /// Returns `IntensityError` when `level` exceeds `MAX_INTENSITY`.
    pub const fn new(level: u8) -> Result<Self, IntensityError> {
        if level > MAX_INTENSITY {
            return Err(IntensityError(level));
        }
        Ok(Self(level))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every level from calm to storm, in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=MAX_INTENSITY).map(Self)
    }

    const fn as_u64(self) -> u64 {
        self.0 as u64
    }

    fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(DEFAULT_INTENSITY)
    }
}

impl TryFrom<u8> for Intensity {
    type Error = IntensityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player-chosen settings that survive a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub intensity: Intensity,
    /// Turns off the symptom scheduler, flood and distraction blob.
    #[serde(default)]
    pub accommodated: bool,
}

/// Errors raised when game configuration invariants are violated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be at least {min:.2} (got {value:.2})")]
    MinViolation {
        field: &'static str,
        min: f64,
        value: f64,
    },
    #[error("{field} must be between {min:.2} and {max:.2} (got {value:.2})")]
    RangeViolation {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("warm-up {warmup:.1}s must be shorter than the game duration {duration:.1}s")]
    WarmupExceedsDuration { warmup: f64, duration: f64 },
    #[error("{field} must strictly decrease across intensities 0..={MAX_INTENSITY}")]
    NotMonotonic { field: &'static str },
    #[error("failed to parse game config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Activation length for one symptom kind: `base + intensity * step + jitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSpec {
    pub base_ms: u64,
    #[serde(default)]
    pub step_ms: u64,
    #[serde(default)]
    pub jitter_ms: u64,
}

impl DurationSpec {
    const fn new(base_ms: u64, step_ms: u64, jitter_ms: u64) -> Self {
        Self {
            base_ms,
            step_ms,
            jitter_ms,
        }
    }

    /// Resolve a concrete duration from a `[0, 1)` jitter roll.
    #[must_use]
    pub fn resolve(self, intensity: Intensity, roll: f64) -> u64 {
        let jitter = scale_millis(self.jitter_ms, roll.clamp(0.0, 1.0));
        self.base_ms
            .saturating_add(intensity.as_u64().saturating_mul(self.step_ms))
            .saturating_add(jitter.min(self.jitter_ms))
    }

    fn validate(self, field: &'static str) -> Result<(), ConfigError> {
        if self.base_ms == 0 {
            return Err(ConfigError::MinViolation {
                field,
                min: 1.0,
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// Durations for the symptoms that expire on a timer.
///
/// Context switch and hyperfocus are closed by the player; notifications use
/// `notification_ttl_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomDurations {
    #[serde(default = "SymptomDurations::default_freeze")]
    pub freeze: DurationSpec,
    #[serde(default = "SymptomDurations::default_color_disruption")]
    pub color_disruption: DurationSpec,
    #[serde(default = "SymptomDurations::default_time_distortion")]
    pub time_distortion: DurationSpec,
    #[serde(default = "SymptomDurations::default_memory_lapse")]
    pub memory_lapse: DurationSpec,
}

impl SymptomDurations {
    const fn default_freeze() -> DurationSpec {
        DurationSpec::new(3_500, 300, 500)
    }

    const fn default_color_disruption() -> DurationSpec {
        DurationSpec::new(5_000, 500, 500)
    }

    const fn default_time_distortion() -> DurationSpec {
        DurationSpec::new(4_000, 200, 500)
    }

    const fn default_memory_lapse() -> DurationSpec {
        DurationSpec::new(2_500, 0, 500)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.freeze.validate("symptoms.durations.freeze.base_ms")?;
        self.color_disruption
            .validate("symptoms.durations.color_disruption.base_ms")?;
        self.time_distortion
            .validate("symptoms.durations.time_distortion.base_ms")?;
        self.memory_lapse
            .validate("symptoms.durations.memory_lapse.base_ms")?;
        Ok(())
    }
}

impl Default for SymptomDurations {
    fn default() -> Self {
        Self {
            freeze: Self::default_freeze(),
            color_disruption: Self::default_color_disruption(),
            time_distortion: Self::default_time_distortion(),
            memory_lapse: Self::default_memory_lapse(),
        }
    }
}

/// Cadence, odds and effect tuning for the symptom scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomConfig {
    #[serde(default = "SymptomConfig::default_base_check_interval_ms")]
    pub base_check_interval_ms: u64,
    #[serde(default = "SymptomConfig::default_check_interval_step_ms")]
    pub check_interval_step_ms: u64,
    #[serde(default = "SymptomConfig::default_base_cooldown_ms")]
    pub base_cooldown_ms: u64,
    #[serde(default = "SymptomConfig::default_cooldown_step_ms")]
    pub cooldown_step_ms: u64,
    #[serde(default = "SymptomConfig::default_min_cooldown_ms")]
    pub min_cooldown_ms: u64,
    #[serde(default = "SymptomConfig::default_base_trigger_chance")]
    pub base_trigger_chance: f64,
    #[serde(default = "SymptomConfig::default_trigger_chance_step")]
    pub trigger_chance_step: f64,
    #[serde(default = "SymptomConfig::default_major_overlap_veto")]
    pub major_overlap_veto: f64,
    #[serde(default)]
    pub durations: SymptomDurations,
    #[serde(default = "SymptomConfig::default_time_distortion_multiplier")]
    pub time_distortion_multiplier: f64,
    #[serde(default = "SymptomConfig::default_hyperfocus_min_wait_ms")]
    pub hyperfocus_min_wait_ms: u64,
    #[serde(default = "SymptomConfig::default_context_switch_timeout_ms")]
    pub context_switch_timeout_ms: u64,
    #[serde(default = "SymptomConfig::default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,
    #[serde(default = "SymptomConfig::default_flood_min_intensity")]
    pub flood_min_intensity: u8,
    #[serde(default = "SymptomConfig::default_flood_interval_ms")]
    pub flood_interval_ms: u64,
    #[serde(default = "SymptomConfig::default_flood_max_burst")]
    pub flood_max_burst: u8,
}

impl SymptomConfig {
    const fn default_base_check_interval_ms() -> u64 {
        BASE_CHECK_INTERVAL_MS
    }

    const fn default_check_interval_step_ms() -> u64 {
        CHECK_INTERVAL_STEP_MS
    }

    const fn default_base_cooldown_ms() -> u64 {
        BASE_COOLDOWN_MS
    }

    const fn default_cooldown_step_ms() -> u64 {
        COOLDOWN_STEP_MS
    }

    const fn default_min_cooldown_ms() -> u64 {
        MIN_COOLDOWN_MS
    }

    const fn default_base_trigger_chance() -> f64 {
        BASE_TRIGGER_CHANCE
    }

    const fn default_trigger_chance_step() -> f64 {
        TRIGGER_CHANCE_STEP
    }

    const fn default_major_overlap_veto() -> f64 {
        MAJOR_OVERLAP_VETO
    }

    const fn default_time_distortion_multiplier() -> f64 {
        TIME_DISTORTION_MULTIPLIER
    }

    const fn default_hyperfocus_min_wait_ms() -> u64 {
        HYPERFOCUS_MIN_WAIT_MS
    }

    const fn default_context_switch_timeout_ms() -> u64 {
        CONTEXT_SWITCH_TIMEOUT_MS
    }

    const fn default_notification_ttl_ms() -> u64 {
        NOTIFICATION_TTL_MS
    }

    const fn default_flood_min_intensity() -> u8 {
        FLOOD_MIN_INTENSITY
    }

    const fn default_flood_interval_ms() -> u64 {
        FLOOD_INTERVAL_MS
    }

    const fn default_flood_max_burst() -> u8 {
        FLOOD_MAX_BURST
    }

    /// Interval between scheduler checks; strictly decreasing in intensity.
    #[must_use]
    pub fn check_interval_ms(&self, intensity: Intensity) -> u64 {
        self.base_check_interval_ms
            .saturating_sub(intensity.as_u64() * self.check_interval_step_ms)
            .max(1)
    }

    /// Minimum gap between activations; strictly decreasing in intensity.
    #[must_use]
    pub fn cooldown_ms(&self, intensity: Intensity) -> u64 {
        self.base_cooldown_ms
            .saturating_sub(intensity.as_u64() * self.cooldown_step_ms)
            .max(self.min_cooldown_ms)
    }

    /// Probability that a check past its cooldown proceeds to kind selection.
    #[must_use]
    pub fn trigger_chance(&self, intensity: Intensity) -> f64 {
        (intensity.as_f64().mul_add(self.trigger_chance_step, self.base_trigger_chance))
            .clamp(0.0, 1.0)
    }

    /// Whether the notification flood runs at this intensity.
    #[must_use]
    pub fn flood_enabled(&self, intensity: Intensity) -> bool {
        intensity.get() >= self.flood_min_intensity
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let max = u64::from(MAX_INTENSITY);
        if self.check_interval_step_ms == 0
            || self.base_check_interval_ms <= max * self.check_interval_step_ms
        {
            return Err(ConfigError::NotMonotonic {
                field: "symptoms.check_interval",
            });
        }
        if self.min_cooldown_ms == 0 {
            return Err(ConfigError::MinViolation {
                field: "symptoms.min_cooldown_ms",
                min: 1.0,
                value: 0.0,
            });
        }
        if self.cooldown_step_ms == 0
            || self.base_cooldown_ms.saturating_sub(max * self.cooldown_step_ms)
                < self.min_cooldown_ms
        {
            return Err(ConfigError::NotMonotonic {
                field: "symptoms.cooldown",
            });
        }
        let top_chance = f64::from(MAX_INTENSITY).mul_add(self.trigger_chance_step, self.base_trigger_chance);
        if self.base_trigger_chance < 0.0 || self.trigger_chance_step < 0.0 || top_chance > 1.0 {
            return Err(ConfigError::RangeViolation {
                field: "symptoms.trigger_chance",
                min: 0.0,
                max: 1.0,
                value: top_chance,
            });
        }
        if !(0.0..=1.0).contains(&self.major_overlap_veto) {
            return Err(ConfigError::RangeViolation {
                field: "symptoms.major_overlap_veto",
                min: 0.0,
                max: 1.0,
                value: self.major_overlap_veto,
            });
        }
        if self.time_distortion_multiplier <= 1.0 {
            return Err(ConfigError::MinViolation {
                field: "symptoms.time_distortion_multiplier",
                min: 1.0,
                value: self.time_distortion_multiplier,
            });
        }
        for (field, value) in [
            ("symptoms.context_switch_timeout_ms", self.context_switch_timeout_ms),
            ("symptoms.notification_ttl_ms", self.notification_ttl_ms),
            ("symptoms.flood_interval_ms", self.flood_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::MinViolation {
                    field,
                    min: 1.0,
                    value: 0.0,
                });
            }
        }
        if self.flood_max_burst == 0 {
            return Err(ConfigError::MinViolation {
                field: "symptoms.flood_max_burst",
                min: 1.0,
                value: 0.0,
            });
        }
        self.durations.validate()
    }
}

impl Default for SymptomConfig {
    fn default() -> Self {
        Self {
            base_check_interval_ms: Self::default_base_check_interval_ms(),
            check_interval_step_ms: Self::default_check_interval_step_ms(),
            base_cooldown_ms: Self::default_base_cooldown_ms(),
            cooldown_step_ms: Self::default_cooldown_step_ms(),
            min_cooldown_ms: Self::default_min_cooldown_ms(),
            base_trigger_chance: Self::default_base_trigger_chance(),
            trigger_chance_step: Self::default_trigger_chance_step(),
            major_overlap_veto: Self::default_major_overlap_veto(),
            durations: SymptomDurations::default(),
            time_distortion_multiplier: Self::default_time_distortion_multiplier(),
            hyperfocus_min_wait_ms: Self::default_hyperfocus_min_wait_ms(),
            context_switch_timeout_ms: Self::default_context_switch_timeout_ms(),
            notification_ttl_ms: Self::default_notification_ttl_ms(),
            flood_min_intensity: Self::default_flood_min_intensity(),
            flood_interval_ms: Self::default_flood_interval_ms(),
            flood_max_burst: Self::default_flood_max_burst(),
        }
    }
}

/// Spawn odds and effect lengths for collectible power-ups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUpConfig {
    #[serde(default = "PowerUpConfig::default_spawn_check_ms")]
    pub spawn_check_ms: u64,
    #[serde(default = "PowerUpConfig::default_spawn_chance")]
    pub spawn_chance: f64,
    #[serde(default = "PowerUpConfig::default_visible_ms")]
    pub visible_ms: u64,
    #[serde(default = "PowerUpConfig::default_slow_time_ms")]
    pub slow_time_ms: u64,
    #[serde(default = "PowerUpConfig::default_slow_time_multiplier")]
    pub slow_time_multiplier: f64,
    #[serde(default = "PowerUpConfig::default_reveal_letters_ms")]
    pub reveal_letters_ms: u64,
    #[serde(default = "PowerUpConfig::default_remove_distraction_ms")]
    pub remove_distraction_ms: u64,
    #[serde(default = "PowerUpConfig::default_remove_distraction_extra_cooldown_ms")]
    pub remove_distraction_extra_cooldown_ms: u64,
}

impl PowerUpConfig {
    const fn default_spawn_check_ms() -> u64 {
        POWER_UP_SPAWN_CHECK_MS
    }

    const fn default_spawn_chance() -> f64 {
        POWER_UP_SPAWN_CHANCE
    }

    const fn default_visible_ms() -> u64 {
        POWER_UP_VISIBLE_MS
    }

    const fn default_slow_time_ms() -> u64 {
        SLOW_TIME_MS
    }

    const fn default_slow_time_multiplier() -> f64 {
        SLOW_TIME_MULTIPLIER
    }

    const fn default_reveal_letters_ms() -> u64 {
        REVEAL_LETTERS_MS
    }

    const fn default_remove_distraction_ms() -> u64 {
        REMOVE_DISTRACTION_MS
    }

    const fn default_remove_distraction_extra_cooldown_ms() -> u64 {
        REMOVE_DISTRACTION_EXTRA_COOLDOWN_MS
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(ConfigError::RangeViolation {
                field: "power_ups.spawn_chance",
                min: 0.0,
                max: 1.0,
                value: self.spawn_chance,
            });
        }
        if !(self.slow_time_multiplier > 0.0 && self.slow_time_multiplier < 1.0) {
            return Err(ConfigError::RangeViolation {
                field: "power_ups.slow_time_multiplier",
                min: 0.0,
                max: 1.0,
                value: self.slow_time_multiplier,
            });
        }
        for (field, value) in [
            ("power_ups.spawn_check_ms", self.spawn_check_ms),
            ("power_ups.visible_ms", self.visible_ms),
            ("power_ups.slow_time_ms", self.slow_time_ms),
            ("power_ups.reveal_letters_ms", self.reveal_letters_ms),
            ("power_ups.remove_distraction_ms", self.remove_distraction_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::MinViolation {
                    field,
                    min: 1.0,
                    value: 0.0,
                });
            }
        }
        Ok(())
    }
}

impl Default for PowerUpConfig {
    fn default() -> Self {
        Self {
            spawn_check_ms: Self::default_spawn_check_ms(),
            spawn_chance: Self::default_spawn_chance(),
            visible_ms: Self::default_visible_ms(),
            slow_time_ms: Self::default_slow_time_ms(),
            slow_time_multiplier: Self::default_slow_time_multiplier(),
            reveal_letters_ms: Self::default_reveal_letters_ms(),
            remove_distraction_ms: Self::default_remove_distraction_ms(),
            remove_distraction_extra_cooldown_ms:
                Self::default_remove_distraction_extra_cooldown_ms(),
        }
    }
}

/// Spawn cadence and click penalty for the distraction blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistractionConfig {
    #[serde(default = "DistractionConfig::default_base_spawn_ms")]
    pub base_spawn_ms: u64,
    #[serde(default = "DistractionConfig::default_visible_ms")]
    pub visible_ms: u64,
    #[serde(default = "DistractionConfig::default_penalty_secs")]
    pub penalty_secs: f64,
}

impl DistractionConfig {
    const fn default_base_spawn_ms() -> u64 {
        DISTRACTION_BASE_SPAWN_MS
    }

    const fn default_visible_ms() -> u64 {
        DISTRACTION_VISIBLE_MS
    }

    const fn default_penalty_secs() -> f64 {
        DISTRACTION_PENALTY_SECS
    }

    /// Spawn interval, shrinking from 1.2x to 0.45x of the base as intensity rises.
    #[must_use]
    pub fn spawn_interval_ms(&self, intensity: Intensity) -> u64 {
        let factor = intensity
            .as_f64()
            .mul_add(-DISTRACTION_SPAWN_FACTOR_STEP, DISTRACTION_SPAWN_FACTOR_BASE);
        scale_millis(self.base_spawn_ms, factor).max(1)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_spawn_ms == 0 || self.visible_ms == 0 {
            return Err(ConfigError::MinViolation {
                field: "distraction.base_spawn_ms/visible_ms",
                min: 1.0,
                value: 0.0,
            });
        }
        if !self.penalty_secs.is_finite() || self.penalty_secs < 0.0 {
            return Err(ConfigError::MinViolation {
                field: "distraction.penalty_secs",
                min: 0.0,
                value: self.penalty_secs,
            });
        }
        Ok(())
    }
}

impl Default for DistractionConfig {
    fn default() -> Self {
        Self {
            base_spawn_ms: Self::default_base_spawn_ms(),
            visible_ms: Self::default_visible_ms(),
            penalty_secs: Self::default_penalty_secs(),
        }
    }
}

/// Full session tuning. Every field defaults, so `{}` is a valid document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "GameConfig::default_game_duration_secs")]
    pub game_duration_secs: f64,
    #[serde(default = "GameConfig::default_warmup_secs")]
    pub warmup_secs: f64,
    #[serde(default = "GameConfig::default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default)]
    pub symptoms: SymptomConfig,
    #[serde(default)]
    pub power_ups: PowerUpConfig,
    #[serde(default)]
    pub distraction: DistractionConfig,
}

impl GameConfig {
    const fn default_game_duration_secs() -> f64 {
        GAME_DURATION_SECS
    }

    const fn default_warmup_secs() -> f64 {
        WARMUP_SECS
    }

    const fn default_tick_ms() -> u64 {
        TICK_MS
    }

    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the JSON is malformed or violates a bound.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate the configuration bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when any field violates the documented bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_timer()?;
        self.symptoms.validate()?;
        self.power_ups.validate()?;
        self.distraction.validate()?;
        Ok(())
    }

    fn validate_timer(&self) -> Result<(), ConfigError> {
        if !self.game_duration_secs.is_finite() || self.game_duration_secs <= 0.0 {
            return Err(ConfigError::MinViolation {
                field: "game_duration_secs",
                min: 1.0,
                value: self.game_duration_secs,
            });
        }
        if !self.warmup_secs.is_finite() || self.warmup_secs < 0.0 {
            return Err(ConfigError::MinViolation {
                field: "warmup_secs",
                min: 0.0,
                value: self.warmup_secs,
            });
        }
        if self.warmup_secs >= self.game_duration_secs {
            return Err(ConfigError::WarmupExceedsDuration {
                warmup: self.warmup_secs,
                duration: self.game_duration_secs,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::MinViolation {
                field: "tick_ms",
                min: 1.0,
                value: 0.0,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_duration_secs: Self::default_game_duration_secs(),
            warmup_secs: Self::default_warmup_secs(),
            tick_ms: Self::default_tick_ms(),
            symptoms: SymptomConfig::default(),
            power_ups: PowerUpConfig::default(),
            distraction: DistractionConfig::default(),
        }
    }
}
