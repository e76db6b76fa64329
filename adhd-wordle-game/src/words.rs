//! Target-word selection from a fixed candidate list with a banned-word filter.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{RandomSource, Stream};
use crate::word::{ParseWordError, Word};

/// Bounded retries before falling back to a linear scan for a safe word.
const MAX_REJECTIONS: usize = 64;

pub const CANDIDATES: [&str; 160] = [
    "FOCUS", "BRAIN", "CHAOS", "SPARK", "DRIFT", "STORM", "PEACE", "BURST", "CRANE", "SLATE",
    "ABOUT", "ALERT", "AMBER", "APPLE", "ARISE", "AWAKE", "BADGE", "BAKER", "BEACH", "BLAZE",
    "BLEND", "BLOOM", "BOARD", "BRAVE", "BREAD", "BRICK", "BRISK", "BRUSH", "CABIN", "CANDY",
    "CHAIR", "CHALK", "CHARM", "CHASE", "CHEST", "CHILL", "CLEAN", "CLEAR", "CLIMB", "CLOCK",
    "CLOUD", "COAST", "CORAL", "COUNT", "CRAFT", "CRISP", "CROWN", "DAILY", "DANCE", "DELTA",
    "DREAM", "DRINK", "EAGER", "EARTH", "EMBER", "EMPTY", "ENJOY", "EQUAL", "EVENT", "FABLE",
    "FAITH", "FEAST", "FIELD", "FLAME", "FLASH", "FLOAT", "FLOCK", "FLOOR", "FLUTE", "FRESH",
    "FROST", "FRUIT", "GIANT", "GLASS", "GLIDE", "GRACE", "GRAIN", "GRAPE", "GRASS", "GREEN",
    "GUIDE", "HAPPY", "HEART", "HONEY", "HORSE", "HOUSE", "IDEAL", "IMAGE", "JOLLY", "JUICE",
    "KNACK", "LASER", "LAUGH", "LEARN", "LEMON", "LIGHT", "LUCKY", "LUNAR", "MAGIC", "MANGO",
    "MAPLE", "MARCH", "MERRY", "METAL", "MIGHT", "MONEY", "MUSIC", "NERVE", "NOBLE", "NOVEL",
    "OCEAN", "OLIVE", "ORBIT", "PAINT", "PANEL", "PAUSE", "PEARL", "PIANO", "PILOT", "PLANT",
    "PLAZA", "POINT", "PRIDE", "PRISM", "PULSE", "QUEST", "QUICK", "QUIET", "RADAR", "RAPID",
    "RELAX", "RIVER", "ROBIN", "SCOUT", "SHINE", "SMILE", "SOLAR", "SPEED", "SPICE", "STACK",
    "STEAM", "SUGAR", "SUNNY", "SWIFT", "TEMPO", "THEME", "TIGER", "TOAST", "TRAIL", "UNITY",
    "VIVID", "WATER", "WHEEL", "WORLD", "DUMMY", "IDIOT", "MORON", "DUNCE", "CRAZY", "LOSER",
];

pub const BANNED: [&str; 6] = ["DUMMY", "IDIOT", "MORON", "DUNCE", "CRAZY", "LOSER"];

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("invalid word in list: {0}")]
    InvalidWord(#[from] ParseWordError),
    #[error("word list has no candidates outside the banned set")]
    NoSafeCandidates,
    #[error("failed to parse word list: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct WordListDoc {
    candidates: Vec<String>,
    #[serde(default)]
    banned: Vec<String>,
}

/// Fixed candidate list plus the set of words that may never be a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSource {
    candidates: Vec<Word>,
    banned: HashSet<Word>,
}

impl WordSource {
    /// Build a source, rejecting lists whose every candidate is banned.
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError` if a word is malformed or no safe candidate remains.
    pub fn new<C, B>(candidates: C, banned: B) -> Result<Self, WordSourceError>
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        let candidates = candidates
            .into_iter()
            .map(|w| w.as_ref().parse::<Word>())
            .collect::<Result<Vec<_>, _>>()?;
        let banned = banned
            .into_iter()
            .map(|w| w.as_ref().parse::<Word>())
            .collect::<Result<HashSet<_>, _>>()?;
        if candidates.iter().all(|w| banned.contains(w)) {
            return Err(WordSourceError::NoSafeCandidates);
        }
        Ok(Self { candidates, banned })
    }

    /// The compiled-in word list.
    #[must_use]
    pub fn embedded() -> Self {
        let candidates = CANDIDATES.iter().copied().map(Word::from_static).collect();
        let banned = BANNED.iter().copied().map(Word::from_static).collect();
        Self { candidates, banned }
    }

    /// Load a list from `{ "candidates": [...], "banned": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the list fails validation.
    pub fn from_json(json: &str) -> Result<Self, WordSourceError> {
        let doc: WordListDoc = serde_json::from_str(json)?;
        Self::new(doc.candidates, doc.banned)
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn is_banned(&self, word: &Word) -> bool {
        self.banned.contains(word)
    }

    /// Candidates that may be chosen as a target.
    pub fn safe_candidates(&self) -> impl Iterator<Item = &Word> {
        self.candidates.iter().filter(|w| !self.banned.contains(*w))
    }

    /// Draw a target uniformly from the candidates, re-rolling banned picks.
    pub fn pick_target(&self, rng: &mut dyn RandomSource) -> Word {
        for _ in 0..MAX_REJECTIONS {
            let idx = rng.pick(Stream::Word, self.candidates.len());
            if let Some(word) = self.candidates.get(idx)
                && !self.banned.contains(word)
            {
                return word.clone();
            }
            log::debug!("re-rolling banned target candidate");
        }
        // Only reachable with a pathological random source.
        self.safe_candidates()
            .next()
            .cloned()
            .unwrap_or_else(|| Word::from_static(CANDIDATES[0]))
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBundle, ScriptedRolls};

    #[test]
    fn embedded_list_is_well_formed() {
        let source = WordSource::embedded();
        assert_eq!(source.candidates().len(), CANDIDATES.len());
        assert!(BANNED.iter().all(|b| CANDIDATES.contains(b)));
        let unique: HashSet<_> = source.candidates().iter().collect();
        assert_eq!(unique.len(), CANDIDATES.len());
    }

    #[test]
    fn never_returns_a_banned_word() {
        let source = WordSource::embedded();
        let mut rng = RngBundle::from_user_seed(0xADD);
        for _ in 0..10_000 {
            let word = source.pick_target(&mut rng);
            assert!(!source.is_banned(&word), "picked banned word {word}");
        }
    }

    #[test]
    fn banned_pick_is_re_rolled() {
        let source = WordSource::new(["DUMMY", "FOCUS"], ["DUMMY"]).unwrap();
        let mut rolls = ScriptedRolls::constant(0.0).with(Stream::Word, &[0.1, 0.1, 0.9]);
        assert_eq!(source.pick_target(&mut rolls).as_str(), "FOCUS");
        assert_eq!(rolls.remaining(Stream::Word), 0);
    }

    #[test]
    fn rejects_fully_banned_lists() {
        assert!(matches!(
            WordSource::new(["DUMMY"], ["DUMMY"]),
            Err(WordSourceError::NoSafeCandidates)
        ));
    }

    #[test]
    fn loads_from_json() {
        let source =
            WordSource::from_json(r#"{"candidates":["spark","drift"],"banned":[]}"#).unwrap();
        assert_eq!(source.safe_candidates().count(), 2);
        assert!(WordSource::from_json(r#"{"candidates":["glow"]}"#).is_err());
    }
}
