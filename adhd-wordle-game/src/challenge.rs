//! Reversible challenge codes for session seeds.
//! Code format: `<WORD>-<NN>`, e.g. `FOCUS-42`, `SPARK-07`.

use crate::words::CANDIDATES;

const CODE_WORDS: usize = 128;

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for b in bytes {
        hash = (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Word index in the low 7 bits, the two-digit suffix above it.
#[inline]
fn pack(word_index: u16, nn: u8) -> u16 {
    (word_index & 0x7F) | ((u16::from(nn) & 0x7F) << 7)
}

#[inline]
fn unpack(packed: u16) -> (usize, u8) {
    (
        usize::from(packed & 0x7F),
        u8::try_from((packed >> 7) & 0x7F).unwrap_or(0),
    )
}

fn compose_seed(word_index: u16, nn: u8) -> u64 {
    let packed = pack(word_index, nn);
    let [lo, hi] = packed.to_le_bytes();
    let h = fnv1a64(&[b'A', b'D', b'H', b'D', b'-', lo, hi, 0x5A]);
    (h & 0xFFFF_FFFF_FFFF_0000) | u64::from(packed)
}

/// Friendly code for a seed. Only the low 14 bits survive, so decoding
/// returns a canonical seed with the same code.
#[must_use]
pub fn encode(seed: u64) -> String {
    let packed = u16::try_from(seed & 0x3FFF).unwrap_or(0);
    let (wi, nn) = unpack(packed);
    let word = CANDIDATES.get(wi).copied().unwrap_or(CANDIDATES[0]);
    format!("{word}-{:02}", nn % 100)
}

/// Canonical seed for a code, case-insensitive.
#[must_use]
pub fn decode(code: &str) -> Option<u64> {
    let (word_part, nn_part) = code.trim().split_once('-')?;
    let nn: u8 = nn_part.trim().parse().ok()?;
    if nn > 99 {
        return None;
    }
    let word = word_part.trim().to_ascii_uppercase();
    let idx = CANDIDATES[..CODE_WORDS].iter().position(|w| *w == word)?;
    let wi = u16::try_from(idx).ok()?;
    Some(compose_seed(wi, nn))
}

/// Fresh code from arbitrary entropy.
#[must_use]
pub fn generate(entropy: u64) -> String {
    let wi = u16::try_from(entropy % CODE_WORDS as u64).unwrap_or(0);
    let nn = u8::try_from((entropy >> 17) % 100).unwrap_or(0);
    encode(compose_seed(wi, nn))
}

/// Accept either a challenge code or a plain decimal seed.
#[must_use]
pub fn parse_seed(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    trimmed.parse::<u64>().ok().or_else(|| decode(trimmed))
}
