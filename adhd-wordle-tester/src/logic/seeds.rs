use adhd_wordle_game::challenge;
use anyhow::{Result, bail};
use serde::Serialize;

/// A seed requested on the command line, with the challenge code it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedInfo {
    pub seed: u64,
    pub code: Option<String>,
}

impl SeedInfo {
    #[must_use]
    pub const fn from_numeric(seed: u64) -> Self {
        Self { seed, code: None }
    }

    /// Code a player would type to replay this seed.
    #[must_use]
    pub fn challenge_code(&self) -> String {
        self.code
            .clone()
            .unwrap_or_else(|| challenge::encode(self.seed))
    }
}

/// Resolve CLI seed tokens: plain integers or `WORD-NN` challenge codes.
/// Duplicates are dropped, order is kept.
///
/// # Errors
///
/// Fails on a token that is neither.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<SeedInfo>> {
    let mut seeds: Vec<SeedInfo> = Vec::new();
    for token in tokens {
        let info = if let Ok(value) = token.parse::<u64>() {
            SeedInfo::from_numeric(value)
        } else if let Some(seed) = challenge::decode(token) {
            SeedInfo {
                seed,
                code: Some(token.to_ascii_uppercase()),
            }
        } else {
            bail!("`{token}` is neither a number nor a challenge code");
        };
        if !seeds.iter().any(|known| known.seed == info.seed) {
            seeds.push(info);
        }
    }
    if seeds.is_empty() {
        bail!("no seeds given");
    }
    Ok(seeds)
}
