//! Symptom kinds, their selection weights and the live flags they toggle.
use serde::{Deserialize, Serialize};

use crate::content::{NotificationTemplate, Puzzle};

/// Every effect the scheduler can roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomKind {
    Freeze,
    ColorDisruption,
    Notification,
    Hyperfocus,
    TimeDistortion,
    ContextSwitch,
    MemoryLapse,
}

impl SymptomKind {
    pub const ALL: [Self; 7] = [
        Self::Freeze,
        Self::ColorDisruption,
        Self::Notification,
        Self::Hyperfocus,
        Self::TimeDistortion,
        Self::ContextSwitch,
        Self::MemoryLapse,
    ];

    /// Share of the selection roll this kind occupies. Weights sum to one.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Freeze | Self::ColorDisruption => 0.16,
            Self::Notification
            | Self::Hyperfocus
            | Self::TimeDistortion
            | Self::ContextSwitch => 0.14,
            Self::MemoryLapse => 0.12,
        }
    }

    /// Map a `[0, 1)` selection roll onto exactly one kind.
    #[must_use]
    pub fn from_roll(roll: f64) -> Self {
        let mut upper = 0.0;
        for kind in Self::ALL {
            upper += kind.weight();
            if roll < upper {
                return kind;
            }
        }
        Self::MemoryLapse
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Freeze => "keyboard freeze",
            Self::ColorDisruption => "color disruption",
            Self::Notification => "notification",
            Self::Hyperfocus => "hyperfocus",
            Self::TimeDistortion => "time distortion",
            Self::ContextSwitch => "context switch",
            Self::MemoryLapse => "memory lapse",
        }
    }
}

/// Open context-switch task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextSwitchTask {
    pub puzzle: Puzzle,
    pub opened_at_ms: u64,
    pub deadline_ms: u64,
}

/// Open hyperfocus episode; it cannot be dismissed before `unlock_at_ms`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HyperfocusEpisode {
    pub fact: &'static str,
    pub opened_at_ms: u64,
    pub unlock_at_ms: u64,
}

/// Visible distraction blob. Position is in percent of the viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistractionBlob {
    pub top_pct: f64,
    pub left_pct: f64,
    pub spawned_at_ms: u64,
    pub hides_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveNotification {
    pub id: u64,
    pub title: &'static str,
    pub body: &'static str,
    pub expires_at_ms: u64,
}

impl ActiveNotification {
    pub(crate) const fn new(id: u64, template: NotificationTemplate, expires_at_ms: u64) -> Self {
        Self {
            id,
            title: template.title,
            body: template.body,
            expires_at_ms,
        }
    }
}

/// Live symptom flags for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SymptomState {
    pub keyboard_frozen: bool,
    pub color_disrupted: bool,
    pub time_distorted: bool,
    /// Indicator only; the lost guess is never restored.
    pub memory_lapse_visible: bool,
    pub context_switch: Option<ContextSwitchTask>,
    pub hyperfocus: Option<HyperfocusEpisode>,
    pub distraction: Option<DistractionBlob>,
    pub notifications: Vec<ActiveNotification>,
    /// Start of the current cooldown window. May lie in the future after a
    /// `remove_distraction` power-up.
    pub last_symptom_at_ms: Option<u64>,
}

impl SymptomState {
    #[must_use]
    pub fn is_active(&self, kind: SymptomKind) -> bool {
        match kind {
            SymptomKind::Freeze => self.keyboard_frozen,
            SymptomKind::ColorDisruption => self.color_disrupted,
            SymptomKind::TimeDistortion => self.time_distorted,
            SymptomKind::MemoryLapse => self.memory_lapse_visible,
            SymptomKind::ContextSwitch => self.context_switch.is_some(),
            SymptomKind::Hyperfocus => self.hyperfocus.is_some(),
            // Notifications stack.
            SymptomKind::Notification => false,
        }
    }

    /// Major symptoms bias the scheduler toward skipping a new activation.
    #[must_use]
    pub fn major_active(&self) -> bool {
        self.keyboard_frozen
            || self.color_disrupted
            || self.context_switch.is_some()
            || self.distraction.is_some()
    }

    #[must_use]
    pub fn blocks_input(&self) -> bool {
        self.keyboard_frozen || self.context_switch.is_some() || self.hyperfocus.is_some()
    }

    /// Kinds whose flag is currently raised, in selection order.
    pub fn active_kinds(&self) -> impl Iterator<Item = SymptomKind> + '_ {
        SymptomKind::ALL
            .into_iter()
            .filter(|kind| self.is_active(*kind))
    }

    /// Whether anything at all is showing, notifications included.
    #[must_use]
    pub fn any_visible(&self) -> bool {
        self.active_kinds().next().is_some()
            || self.distraction.is_some()
            || !self.notifications.is_empty()
    }

    /// Drop every transient flag but keep the cooldown anchor.
    pub(crate) fn clear_transient(&mut self) {
        let last = self.last_symptom_at_ms;
        *self = Self {
            last_symptom_at_ms: last,
            ..Self::default()
        };
    }

    pub(crate) fn set_timed_flag(&mut self, kind: SymptomKind, on: bool) {
        match kind {
            SymptomKind::Freeze => self.keyboard_frozen = on,
            SymptomKind::ColorDisruption => self.color_disrupted = on,
            SymptomKind::TimeDistortion => self.time_distorted = on,
            SymptomKind::MemoryLapse => self.memory_lapse_visible = on,
            SymptomKind::Notification | SymptomKind::Hyperfocus | SymptomKind::ContextSwitch => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PUZZLES;

    #[test]
    fn weights_cover_the_unit_interval() {
        let total: f64 = SymptomKind::ALL.iter().map(|k| k.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn every_kind_is_reachable_from_a_roll() {
        let mut seen = std::collections::BTreeSet::new();
        for step in 0..1_000 {
            seen.insert(SymptomKind::from_roll(f64::from(step) / 1_000.0));
        }
        assert_eq!(seen.len(), SymptomKind::ALL.len());
        assert_eq!(SymptomKind::from_roll(0.0), SymptomKind::Freeze);
        assert_eq!(SymptomKind::from_roll(0.999_999), SymptomKind::MemoryLapse);
        assert_eq!(SymptomKind::from_roll(0.2), SymptomKind::ColorDisruption);
    }

    #[test]
    fn blocking_and_major_sets_differ() {
        let mut state = SymptomState {
            hyperfocus: Some(HyperfocusEpisode {
                fact: "x",
                opened_at_ms: 0,
                unlock_at_ms: 3_000,
            }),
            ..SymptomState::default()
        };
        assert!(state.blocks_input());
        assert!(!state.major_active());

        state.hyperfocus = None;
        state.context_switch = Some(ContextSwitchTask {
            puzzle: PUZZLES[0],
            opened_at_ms: 0,
            deadline_ms: 7_000,
        });
        assert!(state.blocks_input());
        assert!(state.major_active());
    }

    #[test]
    fn clearing_keeps_the_cooldown_anchor() {
        let mut state = SymptomState {
            keyboard_frozen: true,
            time_distorted: true,
            last_symptom_at_ms: Some(42),
            ..SymptomState::default()
        };
        state.clear_transient();
        assert!(!state.any_visible());
        assert_eq!(state.last_symptom_at_ms, Some(42));
    }
}
