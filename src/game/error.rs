//! Expected gameplay outcomes that reject a move
//!
//! None of these are faults: the session or match stays usable after any of them.

use super::duel::MatchId;
use crate::core::{PlayerId, SelectError};

/// Why a submission (or other move) was not accepted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Words need at least {min} letters")]
    TooShort { min: usize },

    #[error("{0} was already found")]
    DuplicateWord(String),

    #[error("{0} is not a valid word")]
    NotAWord(String),

    #[error("{0} cannot be formed from the available letters")]
    CannotForm(String),

    #[error("The session has ended")]
    SessionEnded,

    #[error("Match {0} is not active")]
    MatchNotActive(MatchId),

    #[error("No match with id {0}")]
    UnknownMatch(MatchId),

    #[error("Player {0} is not in this match")]
    NotInMatch(PlayerId),

    #[error(transparent)]
    Selection(#[from] SelectError),
}

/// Errors in the join protocol of a two-player match
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("No match with id {0}")]
    UnknownMatch(MatchId),

    #[error("Match {0} is not waiting for players")]
    NotWaiting(MatchId),

    #[error("Player {0} is already in the match")]
    AlreadyJoined(PlayerId),
}
