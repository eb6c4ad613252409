//! Cross-session statistics for one player

use super::store::{RecordStore, StoreError};
use crate::core::PlayerId;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Persisted statistics, keyed by player id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub username: String,
    /// Highest score in any single game; never lowered
    pub best_score: u32,
    pub wins: u32,
    pub games_played: u32,
    /// Mean score over all games played
    pub average_score: f64,
}

impl PlayerRecord {
    /// A player who has not finished a game yet
    #[must_use]
    pub fn new(id: PlayerId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            best_score: 0,
            wins: 0,
            games_played: 0,
            average_score: 0.0,
        }
    }

    /// Fold one finished game into the statistics
    pub fn apply_result(&mut self, score: u32, won: bool) {
        let previous = f64::from(self.games_played);
        self.games_played += 1;
        self.best_score = self.best_score.max(score);
        if won {
            self.wins += 1;
        }
        self.average_score =
            self.average_score.mul_add(previous, f64::from(score)) / f64::from(self.games_played);
    }
}

/// Record a finished game for a player, creating their record on first appearance
///
/// The stored username is refreshed to `username`.
///
/// # Errors
/// Propagates store failures other than a missing record.
pub fn record_result<S: RecordStore + ?Sized>(
    store: &mut S,
    id: &PlayerId,
    username: &str,
    score: u32,
    won: bool,
) -> Result<PlayerRecord, StoreError> {
    let mut record = match store.get(id) {
        Ok(record) => record,
        Err(StoreError::RecordNotFound(_)) => PlayerRecord::new(id.clone(), username),
        Err(e) => return Err(e),
    };

    record.username = username.to_string();
    record.apply_result(score, won);
    store.put(record.clone())?;

    info!(
        player = %record.id,
        score,
        won,
        best = record.best_score,
        games = record.games_played,
        "player record updated"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::MemoryStore;

    #[test]
    fn apply_result_running_average() {
        let mut r = PlayerRecord::new("1".into(), "Player1");
        r.apply_result(30, false);
        r.apply_result(10, true);
        r.apply_result(20, false);

        assert_eq!(r.games_played, 3);
        assert_eq!(r.wins, 1);
        assert_eq!(r.best_score, 30);
        assert!((r.average_score - 20.0).abs() < 1e-9);
    }

    #[test]
    fn best_score_only_rises() {
        let mut r = PlayerRecord::new("1".into(), "Player1");
        r.apply_result(50, false);
        r.apply_result(5, false);
        assert_eq!(r.best_score, 50);
    }

    #[test]
    fn record_result_creates_then_updates() {
        let mut store = MemoryStore::default();
        let id = PlayerId::from("1");

        let first = record_result(&mut store, &id, "Player1", 12, true).unwrap();
        assert_eq!(first.games_played, 1);
        assert_eq!(first.wins, 1);

        let second = record_result(&mut store, &id, "Ada", 4, false).unwrap();
        assert_eq!(second.games_played, 2);
        assert_eq!(second.best_score, 12);
        assert_eq!(second.username, "Ada");
        assert!((second.average_score - 8.0).abs() < 1e-9);

        assert_eq!(store.get(&id).unwrap(), second);
    }

    #[test]
    fn record_serialises_as_json() {
        let mut r = PlayerRecord::new("7".into(), "Player7");
        r.apply_result(9, true);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"id\":\"7\""));
        assert!(json.contains("\"best_score\":9"));

        let back: PlayerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
