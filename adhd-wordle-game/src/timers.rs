//! Virtual-time timer queue shared by every recurring check and deferred expiry.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::powerups::PowerUpKind;
use crate::symptoms::SymptomKind;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event", content = "target")]
pub enum TimerEvent {
    MasterTick,
    SymptomCheck,
    NotificationFlood,
    DistractionSpawn,
    PowerUpSpawnCheck,
    SymptomExpire(SymptomKind),
    ContextSwitchTimeout,
    NotificationExpire(u64),
    DistractionHide,
    PowerUpVanish,
    PowerUpExpire(PowerUpKind),
}

impl TimerEvent {
    /// Recurring timers re-arm themselves after firing.
    #[must_use]
    pub const fn is_recurring(self) -> bool {
        matches!(
            self,
            Self::MasterTick
                | Self::SymptomCheck
                | Self::NotificationFlood
                | Self::DistractionSpawn
                | Self::PowerUpSpawnCheck
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    pub due_ms: u64,
    pub event: TimerEvent,
    /// Session generation the timer was armed in.
    pub generation: u64,
}

/// Pending timers ordered by due time, then by arming order.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    pending: BTreeMap<(u64, u64), Timer>,
    next_seq: u64,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: u64, event: TimerEvent, generation: u64) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.pending.insert(
            (due_ms, seq),
            Timer {
                due_ms,
                event,
                generation,
            },
        );
    }

    /// Remove and return the earliest timer due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Timer> {
        let (&key, _) = self.pending.first_key_value()?;
        if key.0 > now_ms {
            return None;
        }
        self.pending.remove(&key)
    }

    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Cancel every pending timer carrying `event`; returns how many were dropped.
    pub fn cancel_kind(&mut self, event: TimerEvent) -> usize {
        let before = self.pending.len();
        self.pending.retain(|_, timer| timer.event != event);
        before - self.pending.len()
    }

    /// Cancel pending timers matching a predicate.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&TimerEvent) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|_, timer| !predicate(&timer.event));
        before - self.pending.len()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn contains(&self, event: TimerEvent) -> bool {
        self.pending.values().any(|timer| timer.event == event)
    }

    /// Due time of the first pending `event`, if armed.
    #[must_use]
    pub fn due_of(&self, event: TimerEvent) -> Option<u64> {
        self.pending
            .values()
            .find(|timer| timer.event == event)
            .map(|timer| timer.due_ms)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Timer> {
        self.pending.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_then_arming_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(500, TimerEvent::SymptomCheck, 0);
        queue.schedule(100, TimerEvent::MasterTick, 0);
        queue.schedule(100, TimerEvent::DistractionSpawn, 0);

        assert_eq!(queue.pop_due(50), None);
        assert_eq!(queue.pop_due(100).map(|t| t.event), Some(TimerEvent::MasterTick));
        assert_eq!(
            queue.pop_due(100).map(|t| t.event),
            Some(TimerEvent::DistractionSpawn)
        );
        assert_eq!(queue.pop_due(499), None);
        assert_eq!(queue.next_due(), Some(500));
    }

    #[test]
    fn cancel_kind_leaves_other_timers() {
        let mut queue = TimerQueue::new();
        let freeze = TimerEvent::SymptomExpire(SymptomKind::Freeze);
        queue.schedule(10, freeze, 1);
        queue.schedule(20, TimerEvent::SymptomExpire(SymptomKind::ColorDisruption), 1);
        queue.schedule(30, TimerEvent::MasterTick, 1);

        assert_eq!(queue.cancel_kind(freeze), 1);
        assert!(!queue.contains(freeze));
        assert_eq!(queue.len(), 2);

        let dropped = queue.cancel_where(|e| matches!(e, TimerEvent::SymptomExpire(_)));
        assert_eq!(dropped, 1);
        assert_eq!(queue.due_of(TimerEvent::MasterTick), Some(30));

        queue.cancel_all();
        assert!(queue.is_empty());
    }
}
