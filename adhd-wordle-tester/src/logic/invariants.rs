//! Board and scheduler invariants checked after every step a player takes.
use std::collections::HashMap;

use adhd_wordle_game::{LetterStatus, MAX_ATTEMPTS, PowerUpState, Session, WORD_LENGTH};
use thiserror::Error;

const KNOWN_MULTIPLIERS: [f64; 3] = [0.5, 1.0, 2.0];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("{guesses} guesses but {statuses} status rows")]
    RowsOutOfSync { guesses: usize, statuses: usize },
    #[error("current row {row} does not follow {guesses} guesses")]
    RowPointer { row: usize, guesses: usize },
    #[error("{0} guesses exceed the attempt cap")]
    TooManyGuesses(usize),
    #[error("typing buffer holds {0} letters")]
    BufferOverflow(usize),
    #[error("winner flag set but the last guess is not the target")]
    FalseWin,
    #[error("credited letters in {0} exceed the target")]
    OverCredited(String),
    #[error("{0} timers still pending after game over")]
    TimersAfterGameOver(usize),
    #[error("symptoms still showing after game over")]
    SymptomsAfterGameOver,
    #[error("time multiplier {0} outside the known set")]
    UnexpectedMultiplier(f64),
    #[error("fresh round still carries {0}")]
    StaleAfterReset(&'static str),
}

/// Check what must hold at any instant of a session.
///
/// # Errors
///
/// The first violation found.
pub fn check_invariants(session: &Session) -> Result<(), InvariantViolation> {
    let state = session.state();
    let guesses = state.guesses().len();
    let statuses = state.statuses().len();
    if guesses != statuses {
        return Err(InvariantViolation::RowsOutOfSync { guesses, statuses });
    }
    if state.current_row() != guesses {
        return Err(InvariantViolation::RowPointer {
            row: state.current_row(),
            guesses,
        });
    }
    if guesses > MAX_ATTEMPTS {
        return Err(InvariantViolation::TooManyGuesses(guesses));
    }
    if state.current_guess().len() > WORD_LENGTH {
        return Err(InvariantViolation::BufferOverflow(state.current_guess().len()));
    }
    if state.is_winner() && state.guesses().last() != Some(state.target_word()) {
        return Err(InvariantViolation::FalseWin);
    }

    let target = state.target_word().as_str();
    for (word, row) in state.rows() {
        let mut credited: HashMap<char, usize> = HashMap::new();
        for (letter, status) in word.letters().zip(row.iter()) {
            if *status != LetterStatus::Absent {
                *credited.entry(letter).or_default() += 1;
            }
        }
        let over = credited
            .iter()
            .any(|(letter, count)| *count > target.chars().filter(|c| c == letter).count());
        if over {
            return Err(InvariantViolation::OverCredited(word.to_string()));
        }
    }

    let multiplier = session.time_multiplier();
    if !KNOWN_MULTIPLIERS
        .iter()
        .any(|known| (known - multiplier).abs() < f64::EPSILON)
    {
        return Err(InvariantViolation::UnexpectedMultiplier(multiplier));
    }

    if state.is_game_over() {
        if !session.timers().is_empty() {
            return Err(InvariantViolation::TimersAfterGameOver(
                session.timers().len(),
            ));
        }
        if session.symptoms().any_visible() || session.power_ups().active.is_some() {
            return Err(InvariantViolation::SymptomsAfterGameOver);
        }
    }
    Ok(())
}

/// Check that a reset left nothing from the previous round behind.
///
/// # Errors
///
/// Names the first leftover found.
pub fn check_fresh_round(session: &Session) -> Result<(), InvariantViolation> {
    let state = session.state();
    if !state.guesses().is_empty() || !state.current_guess().is_empty() {
        return Err(InvariantViolation::StaleAfterReset("board rows"));
    }
    if state.is_game_over() {
        return Err(InvariantViolation::StaleAfterReset("game over flag"));
    }
    if session.clock().elapsed_secs() > 0.0 || session.clock().symptoms_active() {
        return Err(InvariantViolation::StaleAfterReset("master timer progress"));
    }
    if session.symptoms().any_visible() {
        return Err(InvariantViolation::StaleAfterReset("symptoms"));
    }
    if *session.power_ups() != PowerUpState::default() {
        return Err(InvariantViolation::StaleAfterReset("power-ups"));
    }
    if session.timers().len() != 1 {
        return Err(InvariantViolation::StaleAfterReset("scheduled timers"));
    }
    if session.lookup_in_flight() {
        return Err(InvariantViolation::StaleAfterReset("dictionary lookup"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adhd_wordle_game::{Settings, SymptomKind, WordListDictionary};

    fn calm_session() -> Session {
        Session::with_settings(
            7,
            Settings {
                accommodated: true,
                ..Settings::default()
            },
        )
    }

    #[test]
    fn fresh_session_satisfies_everything() {
        let session = calm_session();
        assert_eq!(check_invariants(&session), Ok(()));
        assert_eq!(check_fresh_round(&session), Ok(()));
    }

    #[test]
    fn finished_session_satisfies_invariants() {
        let mut session = calm_session();
        let target = session.state().target_word().to_lowercase();
        assert!(session.inject_symptom(SymptomKind::ColorDisruption));
        session.type_word(&target).unwrap();
        session
            .submit_guess(&WordListDictionary::new([target.as_str()]))
            .unwrap();
        assert_eq!(check_invariants(&session), Ok(()));
    }

    #[test]
    fn progressed_round_is_not_fresh() {
        let mut session = calm_session();
        session.advance(5_000);
        assert_eq!(
            check_fresh_round(&session),
            Err(InvariantViolation::StaleAfterReset("master timer progress"))
        );
        session.reset();
        assert_eq!(check_fresh_round(&session), Ok(()));
    }
}
