//! Dictionary lookups used to accept or reject a complete guess.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::words::WordSource;

/// Tri-state answer from a dictionary service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "result", content = "reason")]
pub enum Lookup {
    Found,
    NotFound,
    /// The service could not be reached; the guess may be retried.
    Unreachable(String),
}

/// Looks up lower-case candidate words.
pub trait DictionaryValidator {
    fn lookup(&self, word: &str) -> Lookup;
}

impl<F> DictionaryValidator for F
where
    F: Fn(&str) -> Lookup,
{
    fn lookup(&self, word: &str) -> Lookup {
        self(word)
    }
}

/// Async flavour for transports that suspend, such as an HTTP client.
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait AsyncDictionaryValidator: Send + Sync {
    async fn lookup(&self, word: &str) -> Lookup;
}

/// In-memory dictionary backed by a word set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Every candidate of a word source, banned words included.
    #[must_use]
    pub fn from_source(source: &WordSource) -> Self {
        Self::new(source.candidates().iter().map(|w| w.to_lowercase()))
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.trim().to_ascii_lowercase());
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_ascii_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryValidator for WordListDictionary {
    fn lookup(&self, word: &str) -> Lookup {
        if self.contains(word) {
            Lookup::Found
        } else {
            Lookup::NotFound
        }
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl AsyncDictionaryValidator for WordListDictionary {
    async fn lookup(&self, word: &str) -> Lookup {
        DictionaryValidator::lookup(self, word)
    }
}
