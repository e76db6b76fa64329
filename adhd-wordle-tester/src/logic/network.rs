//! Dictionaries the scripted players validate guesses against.
use std::sync::atomic::{AtomicUsize, Ordering};

use adhd_wordle_game::{AsyncDictionaryValidator, Lookup, WordListDictionary, WordSource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    Reliable,
    /// Every `n`th lookup fails as if the dictionary host were unreachable.
    Flaky { fail_every: usize },
}

impl Network {
    #[must_use]
    pub fn dictionary(self) -> FlakyDictionary {
        let fail_every = match self {
            Self::Reliable => 0,
            Self::Flaky { fail_every } => fail_every,
        };
        FlakyDictionary::new(
            WordListDictionary::from_source(&WordSource::embedded()),
            fail_every,
        )
    }
}

/// Word-list dictionary behind a simulated unreliable link.
#[derive(Debug)]
pub struct FlakyDictionary {
    inner: WordListDictionary,
    fail_every: usize,
    calls: AtomicUsize,
}

impl FlakyDictionary {
    #[must_use]
    pub const fn new(inner: WordListDictionary, fail_every: usize) -> Self {
        Self {
            inner,
            fail_every,
            calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl AsyncDictionaryValidator for FlakyDictionary {
    async fn lookup(&self, word: &str) -> Lookup {
        tokio::task::yield_now().await;
        let call = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        if self.fail_every > 0 && call % self.fail_every == 0 {
            log::debug!("simulated outage on lookup {call} ({word})");
            return Lookup::Unreachable(format!("simulated outage on lookup {call}"));
        }
        AsyncDictionaryValidator::lookup(&self.inner, word).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn flaky_link_fails_on_schedule() {
        let dictionary = Network::Flaky { fail_every: 2 }.dictionary();
        assert_eq!(dictionary.lookup("crane").await, Lookup::Found);
        assert!(matches!(
            dictionary.lookup("crane").await,
            Lookup::Unreachable(_)
        ));
        assert_eq!(dictionary.lookup("zzzzz").await, Lookup::NotFound);
        assert_eq!(dictionary.calls(), 3);
    }

    #[tokio::test]
    async fn reliable_link_never_fails() {
        let dictionary = Network::Reliable.dictionary();
        for _ in 0..5 {
            assert_eq!(dictionary.lookup("slate").await, Lookup::Found);
        }
    }
}
