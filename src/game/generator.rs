//! Letter pool generation
//!
//! Pools are drawn uniformly with replacement from fixed vowel and consonant
//! sets, then shuffled with a fair (Fisher-Yates) permutation.

use crate::core::LetterPool;
use rand::Rng;
use rand::seq::SliceRandom;

pub const VOWELS: &[u8] = b"AEIOU";

/// Consonants for solo pools
pub const SOLO_CONSONANTS: &[u8] = b"BCDFGHJKLMNPQRSTVWXYZ";

/// Consonants for match pools (no Q, V, W, X, Y or Z)
pub const MATCH_CONSONANTS: &[u8] = b"BCDFGHJKLMNPRST";

/// Largest solo pool
pub const MAX_POOL_LEN: usize = 8;

/// Smallest solo pool: one word of the minimum length must fit
pub const MIN_POOL_LEN: usize = 3;

pub const MATCH_VOWELS: usize = 3;
pub const MATCH_CONSONANT_COUNT: usize = 4;

/// What kind of pool to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolMode {
    Solo { difficulty: i32 },
    Match,
}

/// Solo pool length: `4 + difficulty`, clamped to the playable range
#[must_use]
pub fn solo_pool_len(difficulty: i32) -> usize {
    (4 + i64::from(difficulty)).clamp(MIN_POOL_LEN as i64, MAX_POOL_LEN as i64) as usize
}

/// Vowels in a pool of `len` letters: `ceil(len * 0.4)`
#[inline]
#[must_use]
pub const fn vowel_count(len: usize) -> usize {
    (len * 2).div_ceil(5)
}

/// Solo time limit in seconds: `max(120 - 15 * difficulty, 60)`
#[must_use]
pub fn time_limit(difficulty: i32) -> u32 {
    (120 - 15 * i64::from(difficulty)).clamp(60, i64::from(u32::MAX)) as u32
}

/// Generate a fresh pool
pub fn generate<R: Rng + ?Sized>(mode: PoolMode, rng: &mut R) -> LetterPool {
    match mode {
        PoolMode::Solo { difficulty } => {
            let len = solo_pool_len(difficulty);
            let vowels = vowel_count(len);
            draw(rng, vowels, len - vowels, SOLO_CONSONANTS)
        }
        PoolMode::Match => draw(rng, MATCH_VOWELS, MATCH_CONSONANT_COUNT, MATCH_CONSONANTS),
    }
}

/// Solo pool for a difficulty level
pub fn solo_pool<R: Rng + ?Sized>(difficulty: i32, rng: &mut R) -> LetterPool {
    generate(PoolMode::Solo { difficulty }, rng)
}

/// Fixed-size pool for two-player matches
pub fn match_pool<R: Rng + ?Sized>(rng: &mut R) -> LetterPool {
    generate(PoolMode::Match, rng)
}

fn draw<R: Rng + ?Sized>(
    rng: &mut R,
    vowels: usize,
    consonants: usize,
    consonant_set: &[u8],
) -> LetterPool {
    let mut letters = Vec::with_capacity(vowels + consonants);
    letters.extend((0..vowels).map(|_| VOWELS[rng.random_range(0..VOWELS.len())]));
    letters.extend((0..consonants).map(|_| consonant_set[rng.random_range(0..consonant_set.len())]));
    letters.shuffle(rng);

    LetterPool::from_uppercase(letters)
}
