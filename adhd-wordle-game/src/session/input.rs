use serde::Serialize;
use thiserror::Error;

use super::Session;
use crate::constants::WORD_LENGTH;
use crate::dictionary::{DictionaryValidator, Lookup};
use crate::evaluate::GuessStatuses;
use crate::events::{GameOverReason, SessionEvent, ToastLevel};
use crate::word::Word;

/// Recoverable outcomes of guess input. None of them consume an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case", tag = "rejection")]
pub enum GuessRejection {
    #[error("the game is over")]
    GameOver,
    #[error("input is blocked by an active symptom")]
    InputBlocked,
    #[error("a dictionary lookup is already in flight")]
    Busy,
    #[error("`{letter}` is not a letter")]
    NotALetter { letter: char },
    #[error("the row is already full")]
    RowFull,
    #[error("not enough letters ({len} of {WORD_LENGTH})")]
    Incomplete { len: usize },
    #[error("not in word list")]
    NotInWordList,
    #[error("could not validate word: {reason}")]
    Connectivity { reason: String },
    #[error("lookup ticket belongs to an earlier game")]
    Stale,
}

/// Ticket for a guess whose dictionary lookup is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGuess {
    ticket: u64,
    generation: u64,
    word: Word,
}

impl PendingGuess {
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Lower-case form handed to the dictionary.
    #[must_use]
    pub fn lookup_key(&self) -> String {
        self.word.to_lowercase()
    }
}

/// An accepted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub word: Word,
    pub statuses: GuessStatuses,
    pub won: bool,
    pub game_over: bool,
}

impl Session {
    fn input_gate(&self) -> Result<(), GuessRejection> {
        if self.state.is_game_over() {
            return Err(GuessRejection::GameOver);
        }
        if self.in_flight.is_some() {
            return Err(GuessRejection::Busy);
        }
        if self.symptoms.blocks_input() {
            return Err(GuessRejection::InputBlocked);
        }
        Ok(())
    }

    /// Type one letter into the current row.
    ///
    /// # Errors
    ///
    /// Rejected when input is gated, the row is full, or `letter` is not
    /// an ASCII letter.
    pub fn submit_letter(&mut self, letter: char) -> Result<(), GuessRejection> {
        self.input_gate()?;
        if !letter.is_ascii_alphabetic() {
            return Err(GuessRejection::NotALetter { letter });
        }
        if self.state.buffer_is_full() {
            return Err(GuessRejection::RowFull);
        }
        self.state.push_letter(letter);
        Ok(())
    }

    /// Type a whole string, stopping at the first rejection.
    ///
    /// # Errors
    ///
    /// Returns the first rejection hit by [`Session::submit_letter`].
    pub fn type_word(&mut self, letters: &str) -> Result<(), GuessRejection> {
        letters.chars().try_for_each(|c| self.submit_letter(c))
    }

    /// Remove the last typed letter, if any.
    ///
    /// # Errors
    ///
    /// Rejected while input is gated.
    pub fn backspace(&mut self) -> Result<Option<char>, GuessRejection> {
        self.input_gate()?;
        Ok(self.state.pop_letter())
    }

    /// First half of a submission: validate the buffer and take the
    /// single in-flight slot.
    ///
    /// # Errors
    ///
    /// Rejected while input is gated or the row is incomplete.
    pub fn begin_guess(&mut self) -> Result<PendingGuess, GuessRejection> {
        self.input_gate()?;
        let len = self.state.current_guess().len();
        if len != WORD_LENGTH {
            log::debug!("rejecting incomplete guess of {len} letters");
            self.emit(SessionEvent::Shake);
            self.toast(ToastLevel::Error, "Not enough letters");
            return Err(GuessRejection::Incomplete { len });
        }
        let word: Word = self
            .state
            .current_guess()
            .parse()
            .map_err(|_| GuessRejection::Incomplete { len })?;
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.in_flight = Some(ticket);
        Ok(PendingGuess {
            ticket,
            generation: self.generation,
            word,
        })
    }

    /// Second half of a submission: apply the dictionary verdict.
    ///
    /// # Errors
    ///
    /// `NotInWordList` clears the row, `Connectivity` keeps it for a retry,
    /// `Stale` means the ticket predates a reset and nothing changed.
    pub fn resolve_guess(
        &mut self,
        pending: PendingGuess,
        lookup: Lookup,
    ) -> Result<GuessOutcome, GuessRejection> {
        if pending.generation != self.generation || self.in_flight != Some(pending.ticket) {
            log::warn!("discarding stale lookup for {}", pending.word);
            return Err(GuessRejection::Stale);
        }
        self.in_flight = None;
        if self.state.is_game_over() {
            return Err(GuessRejection::GameOver);
        }

        match lookup {
            Lookup::NotFound => {
                log::debug!("{} is not a word", pending.word);
                self.state.clear_buffer();
                self.emit(SessionEvent::Shake);
                self.toast(ToastLevel::Error, "Not in word list");
                Err(GuessRejection::NotInWordList)
            }
            Lookup::Unreachable(reason) => {
                log::warn!("dictionary unreachable: {reason}");
                self.toast(
                    ToastLevel::Error,
                    "Could not validate word. Please check your connection.",
                );
                Err(GuessRejection::Connectivity { reason })
            }
            Lookup::Found => Ok(self.accept_guess(pending.word)),
        }
    }

    fn accept_guess(&mut self, word: Word) -> GuessOutcome {
        let statuses = self.state.record_guess(word.clone());
        log::info!(
            "row {} accepted: {word}",
            self.state.guesses().len()
        );
        self.emit(SessionEvent::GuessAccepted {
            word: word.clone(),
            statuses: statuses.clone(),
        });
        let won = self.state.is_winner();
        let game_over = self.state.is_game_over();
        if won {
            self.finish(GameOverReason::Solved);
        } else if game_over {
            self.finish(GameOverReason::OutOfAttempts);
        }
        GuessOutcome {
            word,
            statuses,
            won,
            game_over,
        }
    }

    /// Submit the current row against a synchronous dictionary.
    ///
    /// # Errors
    ///
    /// Any rejection from [`Session::begin_guess`] or [`Session::resolve_guess`].
    pub fn submit_guess(
        &mut self,
        validator: &dyn DictionaryValidator,
    ) -> Result<GuessOutcome, GuessRejection> {
        let pending = self.begin_guess()?;
        let lookup = validator.lookup(&pending.lookup_key());
        self.resolve_guess(pending, lookup)
    }

    /// Submit the current row against an async dictionary.
    ///
    /// # Errors
    ///
    /// Any rejection from [`Session::begin_guess`] or [`Session::resolve_guess`].
    #[cfg(feature = "async")]
    pub async fn submit_guess_async(
        &mut self,
        validator: &dyn crate::dictionary::AsyncDictionaryValidator,
    ) -> Result<GuessOutcome, GuessRejection> {
        let pending = self.begin_guess()?;
        let lookup = validator.lookup(&pending.lookup_key()).await;
        self.resolve_guess(pending, lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, Settings};
    use crate::dictionary::WordListDictionary;
    use crate::rng::ScriptedRolls;
    use crate::symptoms::SymptomKind;
    use crate::words::WordSource;

    fn session() -> Session {
        let words = WordSource::new(["CRANE"], Vec::<&str>::new()).unwrap();
        Session::new(
            GameConfig::default(),
            Settings::default(),
            words,
            ScriptedRolls::constant(0.0),
        )
        .unwrap()
    }

    #[test]
    fn letters_are_gated_and_bounded() {
        let mut session = session();
        assert_eq!(
            session.submit_letter('1'),
            Err(GuessRejection::NotALetter { letter: '1' })
        );
        session.type_word("crane").unwrap();
        assert_eq!(session.submit_letter('s'), Err(GuessRejection::RowFull));
        assert_eq!(session.backspace(), Ok(Some('E')));
        assert_eq!(session.state().current_guess(), "CRAN");
    }

    #[test]
    fn incomplete_guess_shakes_without_state_change() {
        let mut session = session();
        session.type_word("cra").unwrap();
        let dict = WordListDictionary::new(["crane"]);
        assert_eq!(
            session.submit_guess(&dict),
            Err(GuessRejection::Incomplete { len: 3 })
        );
        assert_eq!(session.state().current_guess(), "CRA");
        assert!(session.drain_events().contains(&SessionEvent::Shake));
    }

    #[test]
    fn second_begin_while_pending_is_busy() {
        let mut session = session();
        session.type_word("crane").unwrap();
        let pending = session.begin_guess().unwrap();
        assert!(session.is_input_blocked());
        assert_eq!(session.begin_guess(), Err(GuessRejection::Busy));
        assert_eq!(session.submit_letter('a'), Err(GuessRejection::Busy));
        let outcome = session.resolve_guess(pending, Lookup::Found).unwrap();
        assert!(outcome.won && outcome.game_over);
        assert_eq!(session.state().guesses().len(), 1);
    }

    #[test]
    fn connectivity_failure_keeps_the_buffer() {
        let mut session = session();
        session.type_word("slate").unwrap();
        let offline = |_: &str| Lookup::Unreachable("timeout".into());
        assert!(matches!(
            session.submit_guess(&offline),
            Err(GuessRejection::Connectivity { .. })
        ));
        assert_eq!(session.state().current_guess(), "SLATE");
        assert!(!session.lookup_in_flight());
        let dict = WordListDictionary::new(["slate"]);
        assert!(session.submit_guess(&dict).is_ok());
    }

    #[test]
    fn ticket_from_before_reset_is_stale() {
        let mut session = session();
        session.type_word("slate").unwrap();
        let pending = session.begin_guess().unwrap();
        session.reset();
        assert_eq!(
            session.resolve_guess(pending, Lookup::Found),
            Err(GuessRejection::Stale)
        );
        assert!(session.state().guesses().is_empty());
    }

    #[test]
    fn freeze_blocks_every_input_path() {
        let mut session = session();
        session.type_word("sla").unwrap();
        assert!(session.inject_symptom(SymptomKind::Freeze));
        assert_eq!(session.submit_letter('t'), Err(GuessRejection::InputBlocked));
        assert_eq!(session.backspace(), Err(GuessRejection::InputBlocked));
        assert_eq!(session.begin_guess(), Err(GuessRejection::InputBlocked));
        assert_eq!(session.state().current_guess(), "SLA");
    }
}
