//! Match store, join protocol and the simulated opponent
//!
//! The registry owns every match; nothing is global. Joins arrive as an
//! explicit [`MatchRegistry::player_joined`] event, which a [`Matchmaker`]
//! produces when polled. [`MatchDriver`] wires a matchmaker, an optional
//! [`OpponentBot`] and the shared clock into one call per second.

use super::duel::{Match, MatchConfig, MatchId, MatchStatus, Outcome, Player};
use super::error::{MatchError, Rejection};
use super::generator::match_pool;
use super::{Accepted, MIN_WORD_LEN};
use crate::core::PlayerId;
use crate::wordlists::{WordOracle, possible_words};
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Every match in the process, keyed by id
///
/// Completed matches stay in the store so their final scores and words can
/// still be read; callers drop them with [`MatchRegistry::remove`].
pub struct MatchRegistry<'a, O: WordOracle + ?Sized> {
    oracle: &'a O,
    config: MatchConfig,
    matches: BTreeMap<MatchId, Match>,
    next_id: u64,
}

impl<'a, O: WordOracle + ?Sized> MatchRegistry<'a, O> {
    #[must_use]
    pub fn new(oracle: &'a O) -> Self {
        Self::with_config(oracle, MatchConfig::default())
    }

    #[must_use]
    pub fn with_config(oracle: &'a O, config: MatchConfig) -> Self {
        Self {
            oracle,
            config,
            matches: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Join the oldest waiting match, or open a new one
    pub fn find_match(&mut self, player: Player) -> MatchId {
        self.find_match_with(player, &mut rand::rng())
    }

    /// [`MatchRegistry::find_match`] with a caller-supplied RNG for the pool
    pub fn find_match_with<R: Rng + ?Sized>(&mut self, player: Player, rng: &mut R) -> MatchId {
        let open = self
            .matches
            .values()
            .find(|m| m.status() == MatchStatus::Waiting && !m.has_player(&player.id))
            .map(Match::id);

        if let Some(id) = open
            && let Some(m) = self.matches.get_mut(&id)
            && m.add_player(player.clone()).is_ok()
        {
            return id;
        }

        let id = MatchId(self.next_id);
        self.next_id += 1;
        let created = Match::new(id, match_pool(rng), player, self.config.clone());
        self.matches.insert(id, created);
        id
    }

    /// Deliver a join event for a waiting match
    ///
    /// # Errors
    /// Fails if the match does not exist, is not waiting, or already seats the player.
    pub fn player_joined(&mut self, id: MatchId, player: Player) -> Result<(), MatchError> {
        self.matches
            .get_mut(&id)
            .ok_or(MatchError::UnknownMatch(id))?
            .add_player(player)
    }

    /// Submit a word in a match
    ///
    /// # Errors
    /// Returns a [`Rejection`] for an unknown match or any failed check.
    pub fn submit(&mut self, id: MatchId, player: &PlayerId, word: &str) -> Result<Accepted, Rejection> {
        self.matches
            .get_mut(&id)
            .ok_or(Rejection::UnknownMatch(id))?
            .submit(player, word, self.oracle)
    }

    /// Submit a player's word in progress
    ///
    /// # Errors
    /// Same as [`MatchRegistry::submit`].
    pub fn submit_selection(&mut self, id: MatchId, player: &PlayerId) -> Result<Accepted, Rejection> {
        self.matches
            .get_mut(&id)
            .ok_or(Rejection::UnknownMatch(id))?
            .submit_selection(player, self.oracle)
    }

    /// Reset a player's word in progress
    ///
    /// # Errors
    /// Fails for an unknown match.
    pub fn clear(&mut self, id: MatchId, player: &PlayerId) -> Result<(), MatchError> {
        self.matches
            .get_mut(&id)
            .ok_or(MatchError::UnknownMatch(id))?
            .clear(player);
        Ok(())
    }

    /// Advance one match's clock by a second
    ///
    /// # Errors
    /// Fails for an unknown match.
    pub fn tick(&mut self, id: MatchId) -> Result<MatchStatus, MatchError> {
        Ok(self
            .matches
            .get_mut(&id)
            .ok_or(MatchError::UnknownMatch(id))?
            .tick())
    }

    #[must_use]
    pub fn get(&self, id: MatchId) -> Option<&Match> {
        self.matches.get(&id)
    }

    pub fn get_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.get_mut(&id)
    }

    /// Drop a match from the store, returning it
    pub fn remove(&mut self, id: MatchId) -> Option<Match> {
        self.matches.remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    #[must_use]
    pub fn oracle(&self) -> &'a O {
        self.oracle
    }
}

/// Source of opponents for waiting matches
pub trait Matchmaker {
    /// Called once per tick while `waiting` has a single player.
    /// Returning a player seats them.
    fn poll(&mut self, waiting: &Match) -> Option<Player>;
}

/// Local stand-in for real matchmaking: "Challenger" turns up after a delay
#[derive(Debug, Clone)]
pub struct SimulatedMatchmaker {
    join_after: u32,
    waited: u32,
}

impl SimulatedMatchmaker {
    pub const DEFAULT_JOIN_AFTER: u32 = 3;
    pub const OPPONENT_NAME: &'static str = "Challenger";

    /// Opponent joins on the `join_after`-th poll (0 joins on the first)
    #[must_use]
    pub const fn new(join_after: u32) -> Self {
        Self {
            join_after,
            waited: 0,
        }
    }
}

impl Default for SimulatedMatchmaker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_JOIN_AFTER)
    }
}

impl Matchmaker for SimulatedMatchmaker {
    fn poll(&mut self, waiting: &Match) -> Option<Player> {
        self.waited += 1;
        if self.waited < self.join_after {
            return None;
        }

        // Id "2" unless the host already has it
        let id = (2u64..)
            .map(|n| PlayerId::new(n.to_string()))
            .find(|id| !waiting.has_player(id))?;
        Some(Player::new(id, Self::OPPONENT_NAME))
    }
}

/// Simulated opponent play: one word every `pace` ticks
///
/// Words come from the pool's possible words, shortest first, skipping any
/// the bot already found. A pace of 0 never plays.
#[derive(Debug, Clone)]
pub struct OpponentBot {
    pace: u32,
    since_last: u32,
    candidates: Option<Vec<String>>,
}

impl OpponentBot {
    #[must_use]
    pub const fn new(pace: u32) -> Self {
        Self {
            pace,
            since_last: 0,
            candidates: None,
        }
    }

    /// The word to play this tick, if it is the bot's turn and one is left
    pub fn next_word<O: WordOracle + ?Sized>(
        &mut self,
        m: &Match,
        me: &PlayerId,
        oracle: &O,
    ) -> Option<String> {
        if self.pace == 0 {
            return None;
        }
        self.since_last += 1;
        if self.since_last < self.pace {
            return None;
        }
        self.since_last = 0;

        let candidates = self.candidates.get_or_insert_with(|| {
            possible_words(m.pool(), oracle)
                .into_iter()
                .rev()
                .filter(|w| w.len() >= MIN_WORD_LEN)
                .map(|w| w.text().to_string())
                .collect()
        });

        candidates
            .iter()
            .find(|w| !m.found_by(me).any(|f| &f.text == *w))
            .cloned()
    }
}

/// What happened on one driver tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickReport {
    /// Still waiting for an opponent
    Waiting,
    /// An opponent was seated; the clock starts on the next tick
    Joined(Player),
    /// The clock ran; the opponent may have played a word
    Running {
        time_remaining: u32,
        opponent_word: Option<Accepted>,
    },
    /// Time is up
    Completed(Option<Outcome>),
}

/// Drives one match once per second on behalf of its host
pub struct MatchDriver<M: Matchmaker> {
    match_id: MatchId,
    matchmaker: M,
    bot: OpponentBot,
    opponent: Option<PlayerId>,
}

impl<M: Matchmaker> MatchDriver<M> {
    #[must_use]
    pub const fn new(match_id: MatchId, matchmaker: M, bot: OpponentBot) -> Self {
        Self {
            match_id,
            matchmaker,
            bot,
            opponent: None,
        }
    }

    #[must_use]
    pub const fn match_id(&self) -> MatchId {
        self.match_id
    }

    /// One second of match time
    ///
    /// While waiting, the matchmaker is polled and a join is processed
    /// without running the clock. Once active, the shared clock advances
    /// exactly once and then the opponent bot may play.
    ///
    /// # Errors
    /// Fails if the match is unknown or the join event is refused.
    pub fn tick<O: WordOracle + ?Sized>(
        &mut self,
        registry: &mut MatchRegistry<'_, O>,
    ) -> Result<TickReport, MatchError> {
        let id = self.match_id;
        let m = registry.get(id).ok_or(MatchError::UnknownMatch(id))?;

        match m.status() {
            MatchStatus::Waiting => {
                let Some(player) = self.matchmaker.poll(m) else {
                    return Ok(TickReport::Waiting);
                };
                registry.player_joined(id, player.clone())?;
                self.opponent = Some(player.id.clone());
                Ok(TickReport::Joined(player))
            }
            MatchStatus::Completed => Ok(TickReport::Completed(m.outcome())),
            MatchStatus::Active => {
                if registry.tick(id)? == MatchStatus::Completed {
                    let outcome = registry.get(id).and_then(Match::outcome);
                    return Ok(TickReport::Completed(outcome));
                }

                let opponent_word = self.opponent_turn(registry);
                let time_remaining = registry.get(id).map_or(0, Match::time_remaining);
                Ok(TickReport::Running {
                    time_remaining,
                    opponent_word,
                })
            }
        }
    }

    fn opponent_turn<O: WordOracle + ?Sized>(
        &mut self,
        registry: &mut MatchRegistry<'_, O>,
    ) -> Option<Accepted> {
        let opponent = self.opponent.as_ref()?;
        let m = registry.get(self.match_id)?;
        let word = self.bot.next_word(m, opponent, registry.oracle())?;

        match registry.submit(self.match_id, opponent, &word) {
            Ok(accepted) => {
                info!(match_id = %self.match_id, word = %accepted.word, "opponent scored");
                Some(accepted)
            }
            Err(rejection) => {
                debug!(match_id = %self.match_id, %rejection, "opponent word rejected");
                None
            }
        }
    }
}
