use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::WORD_LENGTH;

/// A validated, upper-cased word of exactly `WORD_LENGTH` ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWordError {
    #[error("word `{word}` must have {expected} letters but has {actual}")]
    Length {
        word: String,
        expected: usize,
        actual: usize,
    },
    #[error("word `{0}` contains a non-alphabetic character")]
    NonAlphabetic(String),
}

impl Word {
    /// Wrap a compiled-in word that is known to be well formed.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(value.parse::<Self>().is_ok(), "malformed word constant {value}");
        Self(value.to_ascii_uppercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-case form, as sent to dictionary lookups.
    #[must_use]
    pub fn to_lowercase(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let actual = trimmed.chars().count();
        if actual != WORD_LENGTH {
            return Err(ParseWordError::Length {
                word: trimmed.to_string(),
                expected: WORD_LENGTH,
                actual,
            });
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ParseWordError::NonAlphabetic(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for Word {
    type Error = ParseWordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Word> for String {
    fn from(value: Word) -> Self {
        value.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_uppercases() {
        let word: Word = " crane ".parse().unwrap();
        assert_eq!(word.as_str(), "CRANE");
        assert_eq!(word.to_lowercase(), "crane");
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(matches!(
            "glow".parse::<Word>(),
            Err(ParseWordError::Length { actual: 4, .. })
        ));
        assert!(matches!(
            "cr4ne".parse::<Word>(),
            Err(ParseWordError::NonAlphabetic(_))
        ));
    }

    #[test]
    fn serde_goes_through_validation() {
        let word: Word = serde_json::from_str("\"focus\"").unwrap();
        assert_eq!(word.to_string(), "FOCUS");
        assert!(serde_json::from_str::<Word>("\"rush\"").is_err());
    }
}
