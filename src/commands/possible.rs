//! Pool analysis command
//!
//! Lists every word a pool can make, with points, for post-game review.

use crate::core::{LetterPool, score};
use crate::game::MIN_WORD_LEN;
use crate::wordlists::{WordOracle, possible_words};
use anyhow::{Context, Result};
use std::collections::BTreeMap;

/// Every submittable word for one pool
pub struct PoolAnalysis {
    pub pool: LetterPool,
    /// Words longest first, with their points
    pub words: Vec<(String, u32)>,
    /// Word count per length
    pub by_length: BTreeMap<usize, usize>,
    /// Points if every word were found
    pub total_points: u32,
}

impl PoolAnalysis {
    /// The highest-scoring word, earliest in list order on ties
    #[must_use]
    pub fn best_word(&self) -> Option<&(String, u32)> {
        self.words
            .iter()
            .reduce(|best, w| if w.1 > best.1 { w } else { best })
    }
}

/// Analyze the words formable from `letters`
///
/// # Errors
///
/// Returns an error if `letters` contains anything other than letters and
/// separators, or holds no letters at all.
pub fn analyze_pool<O: WordOracle + ?Sized>(letters: &str, oracle: &O) -> Result<PoolAnalysis> {
    let pool = LetterPool::parse(letters)
        .with_context(|| format!("Invalid letter pool '{letters}'"))?;
    anyhow::ensure!(!pool.is_empty(), "Letter pool is empty");

    let words: Vec<(String, u32)> = possible_words(&pool, oracle)
        .into_iter()
        .filter(|w| w.len() >= MIN_WORD_LEN)
        .map(|w| (w.text().to_string(), score(w.text())))
        .collect();

    let mut by_length = BTreeMap::new();
    for (word, _) in &words {
        *by_length.entry(word.len()).or_insert(0) += 1;
    }
    let total_points = words.iter().map(|(_, points)| points).sum();

    Ok(PoolAnalysis {
        pool,
        words,
        by_length,
        total_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["at", "rat", "tar", "star", "rates", "garden"]))
    }

    #[test]
    fn analyze_lists_words_with_points() {
        let result = analyze_pool("s t a r e", &dictionary()).unwrap();

        assert_eq!(result.pool.letters(), b"STARE");
        assert_eq!(
            result.words,
            vec![
                ("RATES".to_string(), 5),
                ("STAR".to_string(), 4),
                ("RAT".to_string(), 3),
                ("TAR".to_string(), 3),
            ]
        );
        assert_eq!(result.total_points, 15);
        assert_eq!(result.by_length.get(&3), Some(&2));
        assert_eq!(result.best_word().map(|w| w.0.as_str()), Some("RATES"));
    }

    #[test]
    fn analyze_rejects_bad_pools() {
        assert!(analyze_pool("ab3", &dictionary()).is_err());
        assert!(analyze_pool(" , ", &dictionary()).is_err());
    }

    #[test]
    fn analyze_embedded_dictionary() {
        let dict = Dictionary::embedded();
        let result = analyze_pool("GARDENST", &dict).unwrap();

        assert!(result.words.iter().any(|(w, _)| w == "GARDEN"));
        assert!(
            result
                .words
                .windows(2)
                .all(|pair| pair[0].0.len() >= pair[1].0.len())
        );
    }
}
