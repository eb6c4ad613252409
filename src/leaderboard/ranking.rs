//! Leaderboard ranking

use super::record::PlayerRecord;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Statistic a leaderboard is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    BestScore,
    Wins,
    AverageScore,
    GamesPlayed,
}

impl Metric {
    pub const ALL: [Self; 4] = [
        Self::BestScore,
        Self::Wins,
        Self::AverageScore,
        Self::GamesPlayed,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BestScore => "best-score",
            Self::Wins => "wins",
            Self::AverageScore => "average-score",
            Self::GamesPlayed => "games-played",
        }
    }

    /// Look a metric up by name; `best_score`, `bestScore` and `best-score` all match
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted: String = name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|m| m.name().replace('-', "") == wanted)
    }

    /// Descending order on this metric
    fn compare(self, a: &PlayerRecord, b: &PlayerRecord) -> Ordering {
        match self {
            Self::BestScore => b.best_score.cmp(&a.best_score),
            Self::Wins => b.wins.cmp(&a.wins),
            Self::AverageScore => b.average_score.total_cmp(&a.average_score),
            Self::GamesPlayed => b.games_played.cmp(&a.games_played),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(|m| m.name()).collect();
            format!("unknown metric '{s}', expected one of: {}", names.join(", "))
        })
    }
}

/// Records ordered by `metric`, highest first; ties keep input order
///
/// The input is left untouched.
#[must_use]
pub fn rank(records: &[PlayerRecord], metric: Metric) -> Vec<PlayerRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| metric.compare(a, b));
    ranked
}

/// The first `limit` records of [`rank`]
#[must_use]
pub fn top(records: &[PlayerRecord], metric: Metric, limit: usize) -> Vec<PlayerRecord> {
    let mut ranked = rank(records, metric);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(id: &str, best: u32, wins: u32, average: f64, games: u32) -> PlayerRecord {
        PlayerRecord {
            id: id.into(),
            username: format!("Player{id}"),
            best_score: best,
            wins,
            games_played: games,
            average_score: average,
        }
    }

    fn ids(records: &[PlayerRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn sample() -> Vec<PlayerRecord> {
        vec![
            record("a", 10, 3, 4.5, 9),
            record("b", 30, 1, 12.0, 2),
            record("c", 10, 5, 8.25, 9),
            record("d", 20, 0, 20.0, 1),
        ]
    }

    #[test]
    fn metric_names() {
        assert_eq!(Metric::from_name("bestScore"), Some(Metric::BestScore));
        assert_eq!(Metric::from_name("best_score"), Some(Metric::BestScore));
        assert_eq!(Metric::from_name("WINS"), Some(Metric::Wins));
        assert_eq!(Metric::from_name("average-score"), Some(Metric::AverageScore));
        assert_eq!(Metric::from_name("gamesPlayed"), Some(Metric::GamesPlayed));
        assert_eq!(Metric::from_name("elo"), None);
        assert!("elo".parse::<Metric>().is_err());
    }

    #[test]
    fn rank_each_metric() {
        let records = sample();
        assert_eq!(ids(&rank(&records, Metric::BestScore)), ["b", "d", "a", "c"]);
        assert_eq!(ids(&rank(&records, Metric::Wins)), ["c", "a", "b", "d"]);
        assert_eq!(ids(&rank(&records, Metric::AverageScore)), ["d", "b", "c", "a"]);
        assert_eq!(ids(&rank(&records, Metric::GamesPlayed)), ["a", "c", "b", "d"]);
    }

    #[test]
    fn rank_leaves_input_alone() {
        let records = sample();
        let before = records.clone();
        let _ = rank(&records, Metric::Wins);
        assert_eq!(records, before);
    }

    #[test]
    fn top_truncates() {
        let records = sample();
        assert_eq!(ids(&top(&records, Metric::BestScore, 2)), ["b", "d"]);
        assert_eq!(top(&records, Metric::BestScore, 10).len(), 4);
        assert!(top(&[], Metric::Wins, 3).is_empty());
    }

    proptest! {
        #[test]
        fn best_score_rank_is_sorted_and_stable(scores in prop::collection::vec(0u32..20, 0..30)) {
            let records: Vec<PlayerRecord> = scores
                .iter()
                .enumerate()
                .map(|(i, &s)| record(&i.to_string(), s, 0, 0.0, 0))
                .collect();
            let ranked = rank(&records, Metric::BestScore);

            prop_assert_eq!(ranked.len(), records.len());
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].best_score >= pair[1].best_score);
                if pair[0].best_score == pair[1].best_score {
                    let a: usize = pair[0].id.as_str().parse().unwrap();
                    let b: usize = pair[1].id.as_str().parse().unwrap();
                    prop_assert!(a < b, "ties must keep input order");
                }
            }
        }
    }
}
