//! End-of-game summary and the shareable emoji grid.
use serde::{Deserialize, Serialize};

use crate::clock::MasterTimer;
use crate::constants::{MAX_ATTEMPTS, SHARE_TITLE, SHARE_URL};
use crate::evaluate::GuessStatuses;
use crate::state::GameState;
use crate::word::Word;

/// Result screen data for a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub won: bool,
    pub attempts: usize,
    pub max_attempts: usize,
    pub time_taken_secs: u32,
    /// `m:ss`
    pub time_taken: String,
    pub target_word: Word,
}

impl GameSummary {
    #[must_use]
    pub fn from_game(state: &GameState, clock: &MasterTimer) -> Self {
        let secs = clock.elapsed_whole_secs();
        Self {
            won: state.is_winner(),
            attempts: state.guesses().len(),
            max_attempts: MAX_ATTEMPTS,
            time_taken_secs: secs,
            time_taken: format_clock(secs),
            target_word: state.target_word().clone(),
        }
    }

    #[must_use]
    pub const fn headline(&self) -> &'static str {
        if self.won {
            "🎉 Congratulations!"
        } else {
            "🌟 Good Effort!"
        }
    }
}

/// `m:ss` with zero-padded seconds.
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Title, emoji grid and link, one row per submitted guess.
#[must_use]
pub fn share_text(rows: &[GuessStatuses]) -> String {
    let grid = rows
        .iter()
        .map(|row| row.iter().map(|status| status.emoji()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{SHARE_TITLE} {}/{MAX_ATTEMPTS}\n\n{grid}\n\n{SHARE_URL}",
        rows.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::evaluate;

    #[test]
    fn share_grid_matches_rows() {
        let rows = [evaluate("SLATE", "CRANE"), evaluate("CRANE", "CRANE")];
        let text = share_text(&rows);
        assert_eq!(
            text,
            "ADHD Wordle 2/6\n\n⬛⬛🟩⬛🟩\n🟩🟩🟩🟩🟩\n\nhttps://wordleadhd.netlify.app/"
        );
    }

    #[test]
    fn clock_format_pads_seconds() {
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(300), "5:00");
        assert_eq!(format_clock(9), "0:09");
    }
}
