//! End-of-game report: what could have been found versus what was

use super::duel::Player;
use super::{FoundWord, MIN_WORD_LEN};
use crate::core::LetterPool;
use crate::wordlists::{WordOracle, possible_words};
use rustc_hash::FxHashSet;

/// Post-game comparison of found words against every possible word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// Every submittable word for the pool, longest first
    pub possible: Vec<String>,
    /// Words the player found, in the order found
    pub found: Vec<String>,
    /// Possible words the player did not find, longest first
    pub missed: Vec<String>,
    /// Found share of the possible words, as a rounded percentage
    pub accuracy: u32,
}

impl GameSummary {
    /// Summarise one player's game on `pool`
    ///
    /// Possible words shorter than [`MIN_WORD_LEN`] are left out since they
    /// could never have been submitted.
    #[must_use]
    pub fn new<'f, O: WordOracle + ?Sized>(
        pool: &LetterPool,
        found_words: impl IntoIterator<Item = &'f FoundWord>,
        oracle: &O,
    ) -> Self {
        let possible: Vec<String> = possible_words(pool, oracle)
            .into_iter()
            .filter(|w| w.len() >= MIN_WORD_LEN)
            .map(|w| w.text().to_string())
            .collect();

        let found: Vec<String> = found_words.into_iter().map(|f| f.text.clone()).collect();
        let found_set: FxHashSet<&str> = found.iter().map(String::as_str).collect();

        let missed = possible
            .iter()
            .filter(|w| !found_set.contains(w.as_str()))
            .cloned()
            .collect();

        let hits = possible
            .iter()
            .filter(|w| found_set.contains(w.as_str()))
            .count();

        Self {
            accuracy: accuracy(hits, possible.len()),
            possible,
            found,
            missed,
        }
    }
}

/// A finished game from one player's point of view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub score: u32,
    /// Strict win in a match; always false for solo play
    pub won: bool,
    /// The opponent as they finished, for matches
    pub opponent: Option<Player>,
    pub summary: GameSummary,
}

/// Rounded percentage; zero when nothing was possible
fn accuracy(hits: usize, possible: usize) -> u32 {
    if possible == 0 {
        return 0;
    }
    let percent = (hits * 200 + possible) / (possible * 2);
    u32::try_from(percent).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn found(words: &[&str]) -> Vec<FoundWord> {
        words
            .iter()
            .map(|w| FoundWord {
                text: (*w).to_string(),
                points: 0,
                owner: PlayerId::from("1"),
                found_at: 0,
            })
            .collect()
    }

    #[test]
    fn splits_found_and_missed() {
        let dict = Dictionary::new(words_from_slice(&["at", "cat", "act", "cats", "dog"]));
        let pool = LetterPool::parse("CATS").unwrap();
        let summary = GameSummary::new(&pool, &found(&["CAT"]), &dict);

        assert_eq!(summary.possible, vec!["CATS", "CAT", "ACT"]);
        assert_eq!(summary.found, vec!["CAT"]);
        assert_eq!(summary.missed, vec!["CATS", "ACT"]);
        assert_eq!(summary.accuracy, 33);
    }

    #[test]
    fn accuracy_rounds_half_up() {
        assert_eq!(accuracy(0, 0), 0);
        assert_eq!(accuracy(1, 2), 50);
        assert_eq!(accuracy(2, 3), 67);
        assert_eq!(accuracy(1, 8), 13);
        assert_eq!(accuracy(5, 5), 100);
    }

    #[test]
    fn nothing_possible() {
        let dict = Dictionary::new(words_from_slice(&["dog"]));
        let pool = LetterPool::parse("CAT").unwrap();
        let summary = GameSummary::new(&pool, &found(&[]), &dict);
        assert!(summary.possible.is_empty());
        assert!(summary.missed.is_empty());
        assert_eq!(summary.accuracy, 0);
    }
}
