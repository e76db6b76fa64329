//! Injectable randomness shared by the word source and the chaos systems.
use std::collections::{HashMap, VecDeque};

use hmac::{Hmac, Mac};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

/// Simulation domain a draw belongs to.
///
/// Each domain owns an independent stream so that, for example, the sequence
/// of target words for a seed does not shift when symptom tuning changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    Word,
    Symptom,
    PowerUp,
    Distraction,
}

impl Stream {
    pub const ALL: [Self; 4] = [Self::Word, Self::Symptom, Self::PowerUp, Self::Distraction];

    const fn tag(self) -> &'static [u8] {
        match self {
            Self::Word => b"word",
            Self::Symptom => b"symptom",
            Self::PowerUp => b"power-up",
            Self::Distraction => b"distraction",
        }
    }
}

/// Source of uniform draws used by every random decision in a session.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)` from the given stream.
    fn roll(&mut self, stream: Stream) -> f64;

    /// Uniform index in `0..len`. Returns 0 for empty ranges.
    fn pick(&mut self, stream: Stream, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let scaled =
            crate::numbers::floor_f64_to_usize(self.roll(stream) * crate::numbers::usize_to_f64(len));
        scaled.min(len - 1)
    }
}

/// Deterministic bundle of RNG streams segregated by simulation domain.
#[derive(Debug, Clone)]
pub struct RngBundle {
    seed: u64,
    word: CountingRng<ChaCha20Rng>,
    symptom: CountingRng<ChaCha20Rng>,
    power_up: CountingRng<ChaCha20Rng>,
    distraction: CountingRng<ChaCha20Rng>,
}

impl RngBundle {
    /// Construct the bundle from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        Self {
            seed,
            word: CountingRng::new(derive_stream_seed(seed, Stream::Word.tag())),
            symptom: CountingRng::new(derive_stream_seed(seed, Stream::Symptom.tag())),
            power_up: CountingRng::new(derive_stream_seed(seed, Stream::PowerUp.tag())),
            distraction: CountingRng::new(derive_stream_seed(seed, Stream::Distraction.tag())),
        }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of draws performed against a stream.
    #[must_use]
    pub const fn draws(&self, stream: Stream) -> u64 {
        match stream {
            Stream::Word => self.word.draws(),
            Stream::Symptom => self.symptom.draws(),
            Stream::PowerUp => self.power_up.draws(),
            Stream::Distraction => self.distraction.draws(),
        }
    }

    fn stream_mut(&mut self, stream: Stream) -> &mut CountingRng<ChaCha20Rng> {
        match stream {
            Stream::Word => &mut self.word,
            Stream::Symptom => &mut self.symptom,
            Stream::PowerUp => &mut self.power_up,
            Stream::Distraction => &mut self.distraction,
        }
    }
}

impl RandomSource for RngBundle {
    fn roll(&mut self, stream: Stream) -> f64 {
        self.stream_mut(stream).r#gen::<f64>()
    }
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<ChaCha20Rng> {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl<R: RngCore> CountingRng<R> {
    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    // HMAC accepts keys of any length, so the fallback is unreachable.
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()) else {
        return user_seed;
    };
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}

/// Replays scripted rolls per stream, falling back to a fixed value once a
/// stream's script runs dry.
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    scripts: HashMap<Stream, VecDeque<f64>>,
    fallback: f64,
}

impl ScriptedRolls {
    /// Source that answers every roll with `fallback`.
    #[must_use]
    pub fn constant(fallback: f64) -> Self {
        Self {
            scripts: HashMap::new(),
            fallback: fallback.clamp(0.0, 0.999_999),
        }
    }

    /// Queue rolls for a stream, consumed in order.
    #[must_use]
    pub fn with(mut self, stream: Stream, rolls: &[f64]) -> Self {
        self.push(stream, rolls);
        self
    }

    /// Append more rolls to a stream's script.
    pub fn push(&mut self, stream: Stream, rolls: &[f64]) {
        self.scripts
            .entry(stream)
            .or_default()
            .extend(rolls.iter().map(|r| r.clamp(0.0, 0.999_999)));
    }

    /// Rolls still queued for a stream.
    #[must_use]
    pub fn remaining(&self, stream: Stream) -> usize {
        self.scripts.get(&stream).map_or(0, VecDeque::len)
    }
}

impl RandomSource for ScriptedRolls {
    fn roll(&mut self, stream: Stream) -> f64 {
        self.scripts
            .get_mut(&stream)
            .and_then(VecDeque::pop_front)
            .unwrap_or(self.fallback)
    }
}
