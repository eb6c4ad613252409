//! Word lists for Word Rush
//!
//! Provides the embedded dictionary compiled into the binary, file loading,
//! and the word oracle used to validate submissions.

mod embedded;
pub mod loader;
mod oracle;

pub use embedded::{WORDS, WORDS_COUNT};
pub use oracle::{Dictionary, WordOracle, possible_words};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_uppercase_letters() {
        for &word in WORDS {
            assert!(
                word.bytes().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn words_fit_pool_sizes() {
        // No pool is longer than 8 letters, so longer words could never be played
        for &word in WORDS {
            assert!(
                (3..=8).contains(&word.len()),
                "Word '{word}' is not 3-8 letters"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS_COUNT);
    }
}
