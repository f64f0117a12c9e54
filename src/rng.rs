//! Seeded random source behind every daily puzzle.
//!
//! The draw sequence for a given seed text is the contract: two builds of
//! this crate must produce the same puzzle for the same seed, so the seed
//! fold, the float construction, and the shuffle algorithm are all fixed
//! here and must not drift.

use chrono::Local;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a fold of the seed text into the 64-bit generator seed.
fn fold_seed_text(seed: &str) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in seed.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Deterministic stream of floats in `[0, 1)` plus the integer draws
/// derived from it. Created once per generation call and discarded.
#[derive(Debug, Clone)]
pub struct SeedStream {
    rng: Pcg64,
}

impl SeedStream {
    pub fn from_seed_text(seed: &str) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(fold_seed_text(seed)),
        }
    }

    /// Next float in `[0, 1)`, built from the top 53 bits of one draw.
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.rng.next_u64() >> 11;
        (bits as f64) * (1.0 / ((1_u64 << 53) as f64))
    }

    /// Uniform integer, inclusive both ends. Caller guarantees `lo <= hi`.
    pub fn int_in_range(&mut self, lo: u32, hi: u32) -> u32 {
        let span = f64::from(hi - lo + 1);
        (self.next_f64() * span) as u32 + lo
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = (self.next_f64() * items.len() as f64) as usize;
        &items[idx]
    }

    /// Fisher-Yates from the end, indexed by float draws. The algorithm
    /// choice is load-bearing: a different shuffle would remap every
    /// seed to a different puzzle.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut arr = items.to_vec();
        for i in (1..arr.len()).rev() {
            let j = (self.next_f64() * (i + 1) as f64) as usize;
            arr.swap(i, j);
        }
        arr
    }
}

/// `YYYY-MM-DD` in the local timezone, the default daily seed.
pub fn local_day_key() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
