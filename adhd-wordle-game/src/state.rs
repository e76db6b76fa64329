//! Board state for one game: target, submitted rows and the typing buffer.
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::evaluate::{GuessStatuses, evaluate};
use crate::word::Word;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    target_word: Word,
    guesses: Vec<Word>,
    statuses: Vec<GuessStatuses>,
    current_guess: String,
    current_row: usize,
    is_game_over: bool,
    is_winner: bool,
}

impl GameState {
    #[must_use]
    pub const fn new(target_word: Word) -> Self {
        Self {
            target_word,
            guesses: Vec::new(),
            statuses: Vec::new(),
            current_guess: String::new(),
            current_row: 0,
            is_game_over: false,
            is_winner: false,
        }
    }

    #[must_use]
    pub const fn target_word(&self) -> &Word {
        &self.target_word
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn statuses(&self) -> &[GuessStatuses] {
        &self.statuses
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    #[must_use]
    pub const fn is_winner(&self) -> bool {
        self.is_winner
    }

    /// Submitted rows paired with their statuses.
    pub fn rows(&self) -> impl Iterator<Item = (&Word, &GuessStatuses)> {
        self.guesses.iter().zip(self.statuses.iter())
    }

    #[must_use]
    pub fn buffer_is_full(&self) -> bool {
        self.current_guess.len() >= WORD_LENGTH
    }

    pub(crate) fn push_letter(&mut self, letter: char) -> bool {
        if self.is_game_over || self.buffer_is_full() || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.current_guess.push(letter.to_ascii_uppercase());
        true
    }

    pub(crate) fn pop_letter(&mut self) -> Option<char> {
        if self.is_game_over {
            return None;
        }
        self.current_guess.pop()
    }

    pub(crate) fn clear_buffer(&mut self) {
        self.current_guess.clear();
    }

    /// Evaluate and append an accepted guess, settling the terminal flags.
    pub(crate) fn record_guess(&mut self, guess: Word) -> GuessStatuses {
        let statuses = evaluate(guess.as_str(), self.target_word.as_str());
        let won = guess == self.target_word;
        self.guesses.push(guess);
        self.statuses.push(statuses.clone());
        self.current_row = self.guesses.len();
        self.current_guess.clear();
        self.is_winner = won;
        self.is_game_over = won || self.guesses.len() >= MAX_ATTEMPTS;
        statuses
    }

    /// Remove the most recent row; `None` when nothing has been submitted.
    pub(crate) fn forget_last_guess(&mut self) -> Option<Word> {
        if self.is_game_over {
            return None;
        }
        let word = self.guesses.pop()?;
        self.statuses.pop();
        self.current_row = self.current_row.saturating_sub(1);
        Some(word)
    }

    /// Terminal loss that does not come from a submitted row.
    pub(crate) fn end_without_win(&mut self) {
        self.is_game_over = true;
        self.is_winner = false;
        self.current_guess.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::LetterStatus;

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    #[test]
    fn buffer_respects_length_and_alphabet() {
        let mut state = GameState::new(word("CRANE"));
        for c in "slates".chars() {
            state.push_letter(c);
        }
        assert_eq!(state.current_guess(), "SLATE");
        assert!(!state.push_letter('x'));
        assert_eq!(state.pop_letter(), Some('E'));
        assert!(!state.push_letter('3'));
        assert_eq!(state.current_guess(), "SLAT");
    }

    #[test]
    fn winning_row_is_terminal() {
        let mut state = GameState::new(word("CRANE"));
        state.record_guess(word("SLATE"));
        let last = state.record_guess(word("CRANE"));
        assert!(last.iter().all(|s| *s == LetterStatus::Correct));
        assert!(state.is_winner() && state.is_game_over());
        assert_eq!(state.current_row(), 2);
        assert_eq!(state.forget_last_guess(), None);
    }

    #[test]
    fn sixth_miss_ends_the_game() {
        let mut state = GameState::new(word("CRANE"));
        for guess in ["SLATE", "PIANO", "MUSIC", "HOUSE", "TIGER", "WORLD"] {
            assert!(!state.is_game_over());
            state.record_guess(word(guess));
        }
        assert!(state.is_game_over());
        assert!(!state.is_winner());
        assert_eq!(state.guesses().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn forgetting_keeps_rows_in_sync() {
        let mut state = GameState::new(word("CRANE"));
        assert_eq!(state.forget_last_guess(), None);
        state.record_guess(word("SLATE"));
        state.record_guess(word("PIANO"));
        assert_eq!(state.forget_last_guess().map(String::from), Some("PIANO".into()));
        assert_eq!(state.guesses().len(), 1);
        assert_eq!(state.statuses().len(), 1);
        assert_eq!(state.current_row(), 1);
    }
}
