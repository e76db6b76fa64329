//! Letter-status evaluation for a guess against the solution.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::WORD_LENGTH;

/// Per-letter classification of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Share-grid glyph for this status.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Correct => "🟩",
            Self::Present => "🟨",
            Self::Absent => "⬛",
        }
    }
}

/// One row of statuses, kept inline for the fixed word length.
pub type GuessStatuses = SmallVec<[LetterStatus; WORD_LENGTH]>;

/// Classify every letter of `guess` against `solution`.
///
/// Both inputs are compared case-insensitively. Exact matches are resolved
/// first and consume their solution letter; the second pass then credits
/// `Present` only against solution letters that are still unconsumed, so a
/// letter is never marked non-absent more often than it occurs in the solution.
#[must_use]
pub fn evaluate(guess: &str, solution: &str) -> GuessStatuses {
    let guess: SmallVec<[char; WORD_LENGTH]> =
        guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    let solution: SmallVec<[char; WORD_LENGTH]> =
        solution.chars().map(|c| c.to_ascii_uppercase()).collect();

    let mut statuses: GuessStatuses = SmallVec::from_elem(LetterStatus::Absent, guess.len());
    let mut taken: SmallVec<[bool; WORD_LENGTH]> = SmallVec::from_elem(false, solution.len());

    for (i, letter) in guess.iter().enumerate() {
        if solution.get(i) == Some(letter) {
            statuses[i] = LetterStatus::Correct;
            taken[i] = true;
        }
    }

    for (i, letter) in guess.iter().enumerate() {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }
        let open = solution
            .iter()
            .enumerate()
            .position(|(j, candidate)| candidate == letter && !taken[j]);
        if let Some(j) = open {
            statuses[i] = LetterStatus::Present;
            taken[j] = true;
        }
    }

    statuses
}

/// Best status observed for each letter across the submitted rows.
///
/// Keyboard renderers use this to tint keys; `Correct` outranks `Present`,
/// which outranks `Absent`.
#[must_use]
pub fn letter_hints<'a, I>(rows: I) -> BTreeMap<char, LetterStatus>
where
    I: IntoIterator<Item = (&'a str, &'a GuessStatuses)>,
{
    let mut hints = BTreeMap::new();
    for (guess, statuses) in rows {
        for (letter, status) in guess.chars().zip(statuses.iter().copied()) {
            let entry = hints
                .entry(letter.to_ascii_uppercase())
                .or_insert(LetterStatus::Absent);
            if status > *entry {
                *entry = status;
            }
        }
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    #[test]
    fn exact_match_is_all_correct() {
        assert!(evaluate("CRANE", "crane").iter().all(|s| *s == Correct));
    }

    #[test]
    fn slate_against_crane() {
        assert_eq!(
            evaluate("SLATE", "CRANE").as_slice(),
            &[Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn duplicate_guess_letter_is_credited_once() {
        // SPEED holds two Es, so both guessed Es are credited and nothing lines up.
        assert_eq!(
            evaluate("ERASE", "SPEED").as_slice(),
            &[Present, Absent, Absent, Present, Present]
        );
        // Doubled guess letter against a single occurrence.
        assert_eq!(
            evaluate("LLAMA", "PLANT").as_slice(),
            &[Absent, Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn correct_is_resolved_before_present() {
        assert_eq!(
            evaluate("EERIE", "THEME").as_slice(),
            &[Present, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn hints_keep_the_best_status() {
        let first = evaluate("SLATE", "CRANE");
        let second = evaluate("CRANE", "CRANE");
        let hints = letter_hints([("SLATE", &first), ("CRANE", &second)]);
        assert_eq!(hints.get(&'A'), Some(&Correct));
        assert_eq!(hints.get(&'S'), Some(&Absent));
        assert_eq!(hints.get(&'C'), Some(&Correct));
    }
}
