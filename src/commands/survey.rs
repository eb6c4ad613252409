//! Pool survey - how rich generated pools are at a difficulty
//!
//! Generates many solo pools and counts the words each one allows.

use crate::game::MIN_WORD_LEN;
use crate::game::generator::{solo_pool, solo_pool_len, time_limit};
use crate::wordlists::{WordOracle, possible_words};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Statistics over the surveyed pools
#[derive(Debug)]
pub struct SurveyStatistics {
    pub difficulty: i32,
    pub pool_len: usize,
    pub time_limit: u32,
    pub pools: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub mean_words: f64,
    /// Pools with no submittable word at all
    pub dead_pools: usize,
    /// Pool with the most words, and its count
    pub richest: Option<(String, usize)>,
    pub total_time: Duration,
}

/// Survey `pools` random pools at `difficulty`, drawing a progress bar
pub fn run_survey<O, R>(difficulty: i32, pools: usize, oracle: &O, rng: &mut R) -> SurveyStatistics
where
    O: WordOracle + Sync + ?Sized,
    R: Rng + ?Sized,
{
    println!("🔎 Surveying {pools} pools at difficulty {difficulty}...");

    let pb = ProgressBar::new(pools as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let stats = survey(difficulty, pools, oracle, rng, &pb);
    pb.finish_with_message("Complete!");
    stats
}

/// Survey without printing; `pb` is advanced once per pool
pub fn survey<O, R>(
    difficulty: i32,
    pools: usize,
    oracle: &O,
    rng: &mut R,
    pb: &ProgressBar,
) -> SurveyStatistics
where
    O: WordOracle + Sync + ?Sized,
    R: Rng + ?Sized,
{
    let start = Instant::now();

    // Draw sequentially so a seeded RNG gives the same pools every run
    let generated: Vec<_> = (0..pools).map(|_| solo_pool(difficulty, rng)).collect();

    let counts: Vec<usize> = generated
        .par_iter()
        .map(|pool| {
            let count = possible_words(pool, oracle)
                .iter()
                .filter(|w| w.len() >= MIN_WORD_LEN)
                .count();
            pb.inc(1);
            count
        })
        .collect();

    let total: usize = counts.iter().sum();
    let mean_words = if counts.is_empty() {
        0.0
    } else {
        total as f64 / counts.len() as f64
    };

    let richest = counts
        .iter()
        .enumerate()
        .max_by_key(|&(i, &count)| (count, std::cmp::Reverse(i)))
        .map(|(i, &count)| (generated[i].to_string(), count));

    SurveyStatistics {
        difficulty,
        pool_len: solo_pool_len(difficulty),
        time_limit: time_limit(difficulty),
        pools,
        min_words: counts.iter().copied().min().unwrap_or(0),
        max_words: counts.iter().copied().max().unwrap_or(0),
        mean_words,
        dead_pools: counts.iter().filter(|&&c| c == 0).count(),
        richest,
        total_time: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn survey_bounds_are_consistent() {
        let dict = Dictionary::embedded();
        let mut rng = StdRng::seed_from_u64(42);
        let stats = survey(3, 40, &dict, &mut rng, &ProgressBar::hidden());

        assert_eq!(stats.pools, 40);
        assert_eq!(stats.pool_len, 7);
        assert_eq!(stats.time_limit, 75);
        assert!(stats.min_words <= stats.max_words);
        assert!(stats.mean_words >= stats.min_words as f64);
        assert!(stats.mean_words <= stats.max_words as f64);
        assert!(stats.dead_pools <= stats.pools);
        assert_eq!(stats.richest.as_ref().map(|r| r.1), Some(stats.max_words));
    }

    #[test]
    fn survey_is_reproducible_with_seed() {
        let dict = Dictionary::embedded();
        let a = survey(1, 20, &dict, &mut StdRng::seed_from_u64(9), &ProgressBar::hidden());
        let b = survey(1, 20, &dict, &mut StdRng::seed_from_u64(9), &ProgressBar::hidden());
        assert_eq!(a.min_words, b.min_words);
        assert_eq!(a.max_words, b.max_words);
        assert_eq!(a.richest, b.richest);
    }

    #[test]
    fn empty_survey() {
        let dict = Dictionary::embedded();
        let stats = survey(0, 0, &dict, &mut StdRng::seed_from_u64(1), &ProgressBar::hidden());
        assert_eq!(stats.max_words, 0);
        assert!(stats.mean_words.abs() < f64::EPSILON);
        assert!(stats.richest.is_none());
    }
}
