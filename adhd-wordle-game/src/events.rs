//! Events a session emits for the presentation layer.
use serde::Serialize;

use crate::evaluate::GuessStatuses;
use crate::powerups::PowerUpKind;
use crate::symptoms::SymptomKind;
use crate::word::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Short-lived message for the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub(crate) fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReason {
    Solved,
    OutOfAttempts,
    OutOfTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum SessionEvent {
    NewGame { generation: u64 },
    SymptomsAwakened,
    SymptomStarted { kind: SymptomKind },
    SymptomEnded { kind: SymptomKind },
    GuessForgotten { word: Word },
    NotificationShown { id: u64, title: &'static str, body: &'static str },
    NotificationCleared { id: u64 },
    DistractionSpawned { top_pct: f64, left_pct: f64 },
    DistractionHidden,
    DistractionClicked { penalty_secs: f64 },
    PowerUpSpawned { kind: PowerUpKind },
    PowerUpVanished { kind: PowerUpKind },
    PowerUpActivated { kind: PowerUpKind },
    PowerUpExpired { kind: PowerUpKind },
    GuessAccepted { word: Word, statuses: GuessStatuses },
    Shake,
    Toast(Toast),
    GameOver { won: bool, reason: GameOverReason },
}
