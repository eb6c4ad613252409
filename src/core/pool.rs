//! Letter pools and the formation check
//!
//! A pool is the fixed, ordered sequence of letters a session is played with.
//! It is never consumed: the word being built is tracked separately by a
//! [`Selection`] of pool slots.

use super::word::{LetterCounts, WordError};
use std::fmt;

/// Ordered letters available for word formation (uppercase, duplicates allowed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool(Vec<u8>);

impl LetterPool {
    /// Build a pool from raw letters, canonicalising to uppercase
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an ASCII letter.
    pub fn new(letters: impl IntoIterator<Item = u8>) -> Result<Self, WordError> {
        let letters: Vec<u8> = letters.into_iter().map(|b| b.to_ascii_uppercase()).collect();
        if letters.iter().all(u8::is_ascii_uppercase) {
            Ok(Self(letters))
        } else {
            Err(WordError::InvalidCharacters)
        }
    }

    /// Wrap letters already known to be uppercase ASCII
    pub(crate) fn from_uppercase(letters: Vec<u8>) -> Self {
        debug_assert!(letters.iter().all(u8::is_ascii_uppercase));
        Self(letters)
    }

    /// Parse a pool from text such as `"aerts"` or `"A E R T S"`
    ///
    /// Whitespace, commas and dashes are ignored.
    ///
    /// # Errors
    /// Returns `WordError` if the text holds anything other than letters and separators.
    ///
    /// # Examples
    /// ```
    /// use wordrush::core::LetterPool;
    ///
    /// let pool = LetterPool::parse("a, e r-t s").unwrap();
    /// assert_eq!(pool.letters(), b"AERTS");
    /// ```
    pub fn parse(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        Self::new(
            text.bytes()
                .filter(|b| !b.is_ascii_whitespace() && *b != b',' && *b != b'-'),
        )
    }

    /// Pool letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.0
    }

    /// Letter at a slot, if the slot exists
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Multiset view of the pool
    #[must_use]
    pub fn counts(&self) -> LetterCounts {
        LetterCounts::from_letters(self.0.iter().copied())
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &letter) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Check whether `word` can be assembled from the letters of `pool`
///
/// Each letter of the word must be matched to a distinct pool occurrence
/// (multiset containment). Order does not matter and the check never fails
/// loudly: anything that cannot be formed, including non-letters, is `false`.
/// No minimum length is imposed here.
///
/// # Examples
/// ```
/// use wordrush::core::{LetterPool, can_form};
///
/// let pool = LetterPool::parse("AERTS").unwrap();
/// assert!(can_form("rates", &pool));
/// assert!(!can_form("treat", &pool)); // needs two Ts
/// ```
#[must_use]
pub fn can_form(word: &str, pool: &LetterPool) -> bool {
    let mut available = pool.counts();
    word.bytes()
        .all(|letter| available.take(letter.to_ascii_uppercase()))
}

/// A pool slot committed to the word in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsedLetter {
    pub letter: u8,
    pub pool_index: usize,
}

/// Errors when building a word from pool slots
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("Slot {index} is outside the pool of {len} letters")]
    OutOfRange { index: usize, len: usize },
    #[error("Slot {0} is already in use")]
    AlreadyUsed(usize),
    #[error("No unused '{0}' left in the pool")]
    Unavailable(char),
}

/// The word in progress: an ordered list of distinct pool slots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    used: Vec<UsedLetter>,
}

impl Selection {
    #[must_use]
    pub const fn new() -> Self {
        Self { used: Vec::new() }
    }

    /// Commit the pool slot at `index`
    ///
    /// # Errors
    /// Fails if the slot does not exist or is already part of the word.
    pub fn select(&mut self, pool: &LetterPool, index: usize) -> Result<u8, SelectError> {
        let letter = pool.get(index).ok_or(SelectError::OutOfRange {
            index,
            len: pool.len(),
        })?;
        if self.is_used(index) {
            return Err(SelectError::AlreadyUsed(index));
        }
        self.used.push(UsedLetter {
            letter,
            pool_index: index,
        });
        Ok(letter)
    }

    /// Commit the first free slot holding `letter`
    ///
    /// # Errors
    /// Returns `SelectError::Unavailable` if every copy of the letter is in use.
    pub fn push_letter(&mut self, pool: &LetterPool, letter: u8) -> Result<usize, SelectError> {
        let letter = letter.to_ascii_uppercase();
        let index = pool
            .letters()
            .iter()
            .enumerate()
            .find(|&(i, &l)| l == letter && !self.is_used(i))
            .map(|(i, _)| i)
            .ok_or(SelectError::Unavailable(letter as char))?;
        self.used.push(UsedLetter {
            letter,
            pool_index: index,
        });
        Ok(index)
    }

    /// Release the most recently committed slot
    pub fn pop(&mut self) -> Option<UsedLetter> {
        self.used.pop()
    }

    /// Release every slot
    pub fn clear(&mut self) {
        self.used.clear();
    }

    #[inline]
    #[must_use]
    pub fn is_used(&self, index: usize) -> bool {
        self.used.iter().any(|u| u.pool_index == index)
    }

    #[inline]
    #[must_use]
    pub fn used(&self) -> &[UsedLetter] {
        &self.used
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// The word spelled by the committed slots
    #[must_use]
    pub fn word(&self) -> String {
        self.used.iter().map(|u| u.letter as char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool(text: &str) -> LetterPool {
        LetterPool::parse(text).unwrap()
    }

    #[test]
    fn parse_ignores_separators() {
        assert_eq!(pool("a e, r-t s").letters(), b"AERTS");
        assert!(LetterPool::parse("AB1").is_err());
        assert!(LetterPool::parse("ÄB").is_err());
    }

    #[test]
    fn display_spaces_letters() {
        assert_eq!(pool("cat").to_string(), "C A T");
    }

    #[test]
    fn can_form_is_order_independent() {
        let p = pool("TACS");
        assert!(can_form("CAT", &p));
        assert!(can_form("ACT", &p));
        assert!(can_form("cats", &p));
        assert!(!can_form("CATS S", &p));
    }

    #[test]
    fn can_form_respects_multiplicity() {
        let p = pool("TREA");
        assert!(!can_form("TREAT", &p));
        let p = pool("TREAT");
        assert!(can_form("TREAT", &p));
    }

    #[test]
    fn can_form_large_pool() {
        let p = LetterPool::new(std::iter::repeat_n(b'A', 300)).unwrap();
        assert!(can_form(&"A".repeat(256), &p));
        assert!(!can_form(&"A".repeat(301), &p));
    }

    #[test]
    fn can_form_empty_word() {
        assert!(can_form("", &pool("ABC")));
        assert!(can_form("", &pool("")));
    }

    #[test]
    fn selection_select_and_word() {
        let p = pool("CATS");
        let mut sel = Selection::new();
        assert_eq!(sel.select(&p, 1), Ok(b'A'));
        assert_eq!(sel.select(&p, 0), Ok(b'C'));
        assert_eq!(sel.word(), "AC");
        assert_eq!(sel.select(&p, 1), Err(SelectError::AlreadyUsed(1)));
        assert_eq!(
            sel.select(&p, 9),
            Err(SelectError::OutOfRange { index: 9, len: 4 })
        );
    }

    #[test]
    fn selection_push_letter_uses_free_slots() {
        let p = pool("EAE");
        let mut sel = Selection::new();
        assert_eq!(sel.push_letter(&p, b'e'), Ok(0));
        assert_eq!(sel.push_letter(&p, b'E'), Ok(2));
        assert_eq!(sel.push_letter(&p, b'E'), Err(SelectError::Unavailable('E')));
        assert_eq!(sel.word(), "EE");
    }

    #[test]
    fn selection_pop_and_clear() {
        let p = pool("CAT");
        let mut sel = Selection::new();
        sel.push_letter(&p, b'C').unwrap();
        sel.push_letter(&p, b'A').unwrap();
        assert_eq!(
            sel.pop(),
            Some(UsedLetter {
                letter: b'A',
                pool_index: 1
            })
        );
        assert!(!sel.is_used(1));
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.word(), "");
    }

    fn pool_strategy() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(b'A'..=b'Z', 1..10)
    }

    proptest! {
        // Any sub-multiset of the pool, in any order, can be formed
        #[test]
        fn sub_multiset_always_forms(
            letters in pool_strategy(),
            mask in prop::collection::vec(any::<bool>(), 10),
            seed in any::<u64>(),
        ) {
            use rand::{SeedableRng, seq::SliceRandom};

            let p = LetterPool::new(letters.clone()).unwrap();
            let mut picked: Vec<u8> = letters
                .iter()
                .zip(mask.iter())
                .filter(|(_, keep)| **keep)
                .map(|(l, _)| *l)
                .collect();
            picked.shuffle(&mut rand::rngs::StdRng::seed_from_u64(seed));
            let word = String::from_utf8(picked).unwrap();
            prop_assert!(can_form(&word, &p), "word={word} pool={p}");
        }

        // One copy too many of any pool letter can never be formed
        #[test]
        fn exceeding_count_never_forms(letters in pool_strategy(), pick in any::<prop::sample::Index>()) {
            let p = LetterPool::new(letters.clone()).unwrap();
            let letter = letters[pick.index(letters.len())];
            let mut word = letters.clone();
            word.push(letter);
            let word = String::from_utf8(word).unwrap();
            prop_assert!(!can_form(&word, &p));
        }

        // can_form agrees with the letter-count comparison
        #[test]
        fn can_form_matches_counts(letters in pool_strategy(), word in "[A-Z]{0,8}") {
            let p = LetterPool::new(letters).unwrap();
            let expected = p.counts().contains(&super::LetterCounts::from_letters(word.bytes()));
            prop_assert_eq!(can_form(&word, &p), expected);
        }
    }
}
