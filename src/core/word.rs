//! Dictionary word representation
//!
//! A Word stores an uppercase word along with its letter counts, so that
//! formation checks against a letter pool are a multiset comparison.

use rustc_hash::FxHashMap;
use std::fmt;

/// Multiset of letters: letter -> number of occurrences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts(FxHashMap<u8, usize>);

impl LetterCounts {
    /// Count the letters of an iterator, canonicalising to uppercase
    pub fn from_letters(letters: impl IntoIterator<Item = u8>) -> Self {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        for letter in letters {
            *counts.entry(letter.to_ascii_uppercase()).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Number of occurrences of `letter` (0 if absent)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> usize {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    /// Check whether `other` is a sub-multiset of `self`
    ///
    /// Every letter of `other` must occur in `self` at least as many times.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other
            .0
            .iter()
            .all(|(&letter, &count)| self.get(letter) >= count)
    }

    /// Remove one occurrence of `letter`, returning false if none remain
    pub fn take(&mut self, letter: u8) -> bool {
        match self.0.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

/// A playable word, stored uppercase with its letter counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    counts: LetterCounts,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is canonicalised to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordrush::core::Word;
    ///
    /// let word = Word::new("garden").unwrap();
    /// assert_eq!(word.text(), "GARDEN");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("r4te").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let counts = LetterCounts::from_letters(text.bytes());

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> &LetterCounts {
        &self.counts
    }

    /// Check whether this word can be assembled from the given letters
    #[inline]
    #[must_use]
    pub fn fits(&self, available: &LetterCounts) -> bool {
        available.contains(&self.counts)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
