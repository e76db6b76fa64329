//! Collectible power-ups and their timed effects.
use serde::{Deserialize, Serialize};

use crate::config::PowerUpConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    SlowTime,
    RevealLetters,
    RemoveDistraction,
}

impl PowerUpKind {
    pub const ALL: [Self; 3] = [Self::SlowTime, Self::RevealLetters, Self::RemoveDistraction];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SlowTime => "slow time",
            Self::RevealLetters => "reveal letters",
            Self::RemoveDistraction => "remove distraction",
        }
    }

    /// How long the effect lasts once collected.
    #[must_use]
    pub const fn duration_ms(self, cfg: &PowerUpConfig) -> u64 {
        match self {
            Self::SlowTime => cfg.slow_time_ms,
            Self::RevealLetters => cfg.reveal_letters_ms,
            Self::RemoveDistraction => cfg.remove_distraction_ms,
        }
    }
}

/// A power-up that is either waiting to be collected or already running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedPowerUp {
    pub kind: PowerUpKind,
    pub until_ms: u64,
}

/// At most one power-up is available or active at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpState {
    pub available: Option<TimedPowerUp>,
    pub active: Option<TimedPowerUp>,
}

impl PowerUpState {
    #[must_use]
    pub const fn can_spawn(&self) -> bool {
        self.available.is_none() && self.active.is_none()
    }

    #[must_use]
    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.active.is_some_and(|p| p.kind == kind)
    }

    /// Symptom checks, the flood and the distraction spawner stand down.
    #[must_use]
    pub fn suppresses_symptoms(&self) -> bool {
        self.is_active(PowerUpKind::RemoveDistraction)
    }

    /// Factor this state contributes to the master timer.
    #[must_use]
    pub fn time_factor(&self, cfg: &PowerUpConfig) -> f64 {
        if self.is_active(PowerUpKind::SlowTime) {
            cfg.slow_time_multiplier
        } else {
            1.0
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
