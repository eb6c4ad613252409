//! Two-player match engine
//!
//! Both players build words against one shared pool. The pool is only
//! validated against, never consumed, so both players may use the same
//! letter instance in different words. Each player has a private word in
//! progress and a private list of found words.

use super::error::{MatchError, Rejection};
use super::{Accepted, FoundWord, MIN_WORD_LEN, validate};
use crate::core::{LetterPool, PlayerId, Selection};
use crate::wordlists::WordOracle;
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::{debug, info};

/// Match identifier, displayed as `match_<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchId(pub u64);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match_{}", self.0)
    }
}

/// A participant and their running score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub username: String,
    pub score: u32,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            score: 0,
        }
    }

    /// Player named after their id (`Player<id>`)
    #[must_use]
    pub fn unnamed(id: PlayerId) -> Self {
        let username = id.default_username();
        Self::new(id, username)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Waiting,
    Active,
    Completed,
}

/// Who won a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Winner(PlayerId),
    Tie,
}

/// Settings for a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Seconds on the shared clock once the match is active
    pub time_limit: u32,
    pub min_word_len: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            time_limit: 120,
            min_word_len: MIN_WORD_LEN,
        }
    }
}

/// A two-player timed match on a shared pool
#[derive(Debug, Clone)]
pub struct Match {
    id: MatchId,
    pool: LetterPool,
    players: Vec<Player>,
    config: MatchConfig,
    time_remaining: u32,
    status: MatchStatus,
    found_words: Vec<FoundWord>,
    selections: FxHashMap<PlayerId, Selection>,
}

impl Match {
    /// Open a match with its first player; it waits for an opponent
    #[must_use]
    pub fn new(id: MatchId, pool: LetterPool, host: Player, config: MatchConfig) -> Self {
        info!(match_id = %id, host = %host.id, pool = %pool, "match created");

        let mut selections = FxHashMap::default();
        selections.insert(host.id.clone(), Selection::new());

        Self {
            id,
            pool,
            players: vec![host],
            time_remaining: config.time_limit,
            config,
            status: MatchStatus::Waiting,
            found_words: Vec::new(),
            selections,
        }
    }

    /// Seat the second player, activating the match
    ///
    /// With no time on the clock the match completes at once.
    ///
    /// # Errors
    /// Fails unless the match is waiting and the player is not already seated.
    pub fn add_player(&mut self, player: Player) -> Result<(), MatchError> {
        if self.status != MatchStatus::Waiting || self.players.len() >= 2 {
            return Err(MatchError::NotWaiting(self.id));
        }
        if self.has_player(&player.id) {
            return Err(MatchError::AlreadyJoined(player.id));
        }

        info!(match_id = %self.id, player = %player.id, "player joined, match active");
        self.selections.insert(player.id.clone(), Selection::new());
        self.players.push(player);
        self.status = if self.time_remaining == 0 {
            info!(match_id = %self.id, "no time limit left, match completed on join");
            MatchStatus::Completed
        } else {
            MatchStatus::Active
        };
        Ok(())
    }

    /// Submit a word for one player
    ///
    /// Duplicates are checked against that player's own words only.
    ///
    /// # Errors
    /// Returns a [`Rejection`] when the match is not active, the player is
    /// not seated, or the word fails validation.
    pub fn submit<O: WordOracle + ?Sized>(
        &mut self,
        player_id: &PlayerId,
        word: &str,
        oracle: &O,
    ) -> Result<Accepted, Rejection> {
        if self.status != MatchStatus::Active {
            return Err(Rejection::MatchNotActive(self.id));
        }
        let seat = self.seat(player_id)?;

        let found = &self.found_words;
        let outcome = validate(
            word,
            self.config.min_word_len,
            |w| found.iter().any(|f| &f.owner == player_id && f.text == w),
            oracle,
            &self.pool,
        );
        let (text, points) = outcome.inspect_err(|rejection| {
            debug!(match_id = %self.id, player = %player_id, %rejection, "submission rejected");
        })?;

        let found_at = self.config.time_limit.saturating_sub(self.time_remaining);
        let player = &mut self.players[seat];
        player.score += points;
        let score = player.score;

        self.found_words.push(FoundWord {
            text: text.clone(),
            points,
            owner: player_id.clone(),
            found_at,
        });
        if let Some(selection) = self.selections.get_mut(player_id) {
            selection.clear();
        }

        debug!(match_id = %self.id, player = %player_id, word = %text, points, score, "word accepted");

        Ok(Accepted {
            word: text,
            points,
            score,
        })
    }

    /// Submit a player's word in progress
    ///
    /// # Errors
    /// Same as [`Match::submit`].
    pub fn submit_selection<O: WordOracle + ?Sized>(
        &mut self,
        player_id: &PlayerId,
        oracle: &O,
    ) -> Result<Accepted, Rejection> {
        let word = self
            .selections
            .get(player_id)
            .map(Selection::word)
            .ok_or_else(|| Rejection::NotInMatch(player_id.clone()))?;
        self.submit(player_id, &word, oracle)
    }

    /// Add the first unused copy of `letter` to a player's word in progress
    ///
    /// # Errors
    /// Fails if the player is not seated or no unused copy remains.
    pub fn push_letter(&mut self, player_id: &PlayerId, letter: u8) -> Result<usize, Rejection> {
        let selection = self
            .selections
            .get_mut(player_id)
            .ok_or_else(|| Rejection::NotInMatch(player_id.clone()))?;
        Ok(selection.push_letter(&self.pool, letter)?)
    }

    /// Add the pool slot at `index` to a player's word in progress
    ///
    /// # Errors
    /// Fails if the player is not seated or the slot is missing or used.
    pub fn select(&mut self, player_id: &PlayerId, index: usize) -> Result<u8, Rejection> {
        let selection = self
            .selections
            .get_mut(player_id)
            .ok_or_else(|| Rejection::NotInMatch(player_id.clone()))?;
        Ok(selection.select(&self.pool, index)?)
    }

    /// Remove the last letter of a player's word in progress
    pub fn pop_letter(&mut self, player_id: &PlayerId) {
        if let Some(selection) = self.selections.get_mut(player_id) {
            selection.pop();
        }
    }

    /// Reset a player's word in progress
    pub fn clear(&mut self, player_id: &PlayerId) {
        if let Some(selection) = self.selections.get_mut(player_id) {
            selection.clear();
        }
    }

    /// Advance the shared clock by one second
    ///
    /// The clock only runs while the match is active. Reaching zero
    /// completes the match and freezes the scores.
    pub fn tick(&mut self) -> MatchStatus {
        if self.status != MatchStatus::Active {
            return self.status;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.status = MatchStatus::Completed;
            for selection in self.selections.values_mut() {
                selection.clear();
            }
            info!(match_id = %self.id, outcome = ?self.outcome(), "match completed");
        }
        self.status
    }

    /// Winner by strictly higher score; `None` until two players are seated
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let [first, second] = self.players.as_slice() else {
            return None;
        };
        Some(match first.score.cmp(&second.score) {
            std::cmp::Ordering::Greater => Outcome::Winner(first.id.clone()),
            std::cmp::Ordering::Less => Outcome::Winner(second.id.clone()),
            std::cmp::Ordering::Equal => Outcome::Tie,
        })
    }

    #[must_use]
    pub const fn id(&self) -> MatchId {
        self.id
    }

    #[must_use]
    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// The other seated player, if any
    #[must_use]
    pub fn opponent_of(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id != id)
    }

    #[must_use]
    pub fn has_player(&self, id: &PlayerId) -> bool {
        self.player(id).is_some()
    }

    /// Words found by one player, in order
    pub fn found_by<'m>(&'m self, id: &'m PlayerId) -> impl Iterator<Item = &'m FoundWord> + 'm {
        self.found_words.iter().filter(move |f| &f.owner == id)
    }

    #[must_use]
    pub fn found_words(&self) -> &[FoundWord] {
        &self.found_words
    }

    #[must_use]
    pub fn selection(&self, id: &PlayerId) -> Option<&Selection> {
        self.selections.get(id)
    }

    #[must_use]
    pub const fn status(&self) -> MatchStatus {
        self.status
    }

    #[must_use]
    pub const fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub const fn time_limit(&self) -> u32 {
        self.config.time_limit
    }

    fn seat(&self, id: &PlayerId) -> Result<usize, Rejection> {
        self.players
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| Rejection::NotInMatch(id.clone()))
    }
}
