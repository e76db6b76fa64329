//! Master countdown: elapsed game seconds advanced once per tick by the
//! current time multiplier.
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::numbers::{floor_secs_to_u32, millis_to_secs};

/// Result of one master tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The warm-up threshold was crossed on this tick.
    pub awakened: bool,
    /// Elapsed time reached the game duration.
    pub expired: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterTimer {
    elapsed_secs: f64,
    symptoms_active: bool,
    stopped: bool,
    duration_secs: f64,
    warmup_secs: f64,
    tick_secs: f64,
}

impl MasterTimer {
    #[must_use]
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            elapsed_secs: 0.0,
            symptoms_active: false,
            stopped: false,
            duration_secs: cfg.game_duration_secs,
            warmup_secs: cfg.warmup_secs,
            tick_secs: millis_to_secs(cfg.tick_ms),
        }
    }

    /// Apply one tick scaled by `multiplier`. A stopped timer never moves.
    pub fn tick(&mut self, multiplier: f64) -> TickOutcome {
        if self.stopped {
            return TickOutcome::default();
        }
        self.elapsed_secs =
            (self.elapsed_secs + self.tick_secs * multiplier.max(0.0)).min(self.duration_secs);
        self.check_thresholds()
    }

    /// Add a penalty, capped at the game duration.
    pub fn penalize(&mut self, secs: f64) -> TickOutcome {
        if self.stopped {
            return TickOutcome::default();
        }
        self.elapsed_secs = (self.elapsed_secs + secs.max(0.0)).min(self.duration_secs);
        self.check_thresholds()
    }

    fn check_thresholds(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if !self.symptoms_active && self.elapsed_secs >= self.warmup_secs {
            self.symptoms_active = true;
            outcome.awakened = true;
        }
        if self.elapsed_secs >= self.duration_secs {
            outcome.expired = true;
        }
        outcome
    }

    pub(crate) fn stop(&mut self) {
        self.stopped = true;
    }

    #[must_use]
    pub const fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    #[must_use]
    pub fn remaining_secs(&self) -> f64 {
        (self.duration_secs - self.elapsed_secs).max(0.0)
    }

    /// Whole elapsed seconds, as shown on the summary.
    #[must_use]
    pub fn elapsed_whole_secs(&self) -> u32 {
        floor_secs_to_u32(self.elapsed_secs)
    }

    #[must_use]
    pub const fn symptoms_active(&self) -> bool {
        self.symptoms_active
    }

    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[must_use]
    pub const fn duration_secs(&self) -> f64 {
        self.duration_secs
    }
}
