//! Word membership oracle and possible-word enumeration

use super::WORDS;
use super::loader::words_from_slice;
use crate::core::{LetterPool, Word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Answers whether a string is a known word, and lists every known word
pub trait WordOracle {
    /// Case-insensitive membership test
    fn is_word(&self, text: &str) -> bool;

    /// Every known word, in list order
    fn words(&self) -> &[Word];
}

/// Fixed word list with a hashed index for lookups
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of repeated words
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(word.text().to_string()))
            .collect();

        Self { words, index }
    }

    /// Dictionary backed by the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordOracle for Dictionary {
    fn is_word(&self, text: &str) -> bool {
        self.index.contains(&text.trim().to_ascii_uppercase())
    }

    fn words(&self) -> &[Word] {
        &self.words
    }
}

/// Every oracle word that can be formed from `pool`, longest first
///
/// Words of equal length keep their oracle-list order, so the result is
/// deterministic for a fixed pool and oracle.
pub fn possible_words<'a, O: WordOracle + ?Sized>(pool: &LetterPool, oracle: &'a O) -> Vec<&'a Word> {
    let available = pool.counts();

    let mut possible: Vec<&Word> = oracle
        .words()
        .par_iter()
        .filter(|word| word.fits(&available))
        .collect();

    // Stable: ties stay in list order
    possible.sort_by(|a, b| b.len().cmp(&a.len()));
    possible
}
