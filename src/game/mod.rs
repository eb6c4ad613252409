//! Game engines
//!
//! The solo session and the two-player match share one submission pipeline:
//! length check, duplicate check, dictionary lookup, formation check, scoring.

pub mod duel;
mod error;
pub mod generator;
pub mod matchmaking;
pub mod session;
mod summary;

pub use duel::{Match, MatchConfig, MatchId, MatchStatus, Outcome, Player};
pub use error::{MatchError, Rejection};
pub use matchmaking::{
    MatchDriver, MatchRegistry, Matchmaker, OpponentBot, SimulatedMatchmaker, TickReport,
};
pub use session::{Session, SessionConfig, SessionStatus};
pub use summary::{GameReport, GameSummary};

use crate::core::{LetterPool, PlayerId, can_form, score};
use crate::wordlists::WordOracle;

/// Words shorter than this are rejected before the dictionary is consulted
pub const MIN_WORD_LEN: usize = 3;

/// A word accepted for a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub text: String,
    pub points: u32,
    pub owner: PlayerId,
    /// Seconds into the game when the word was accepted
    pub found_at: u32,
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: String,
    pub points: u32,
    /// Submitter's running score after this word
    pub score: u32,
}

/// Run the submission checks, cheapest first
///
/// Returns the canonical (uppercase) word and its points.
fn validate<O: WordOracle + ?Sized>(
    raw: &str,
    min_len: usize,
    already_found: impl Fn(&str) -> bool,
    oracle: &O,
    pool: &LetterPool,
) -> Result<(String, u32), Rejection> {
    let word = raw.trim().to_uppercase();

    if word.chars().count() < min_len {
        return Err(Rejection::TooShort { min: min_len });
    }

    if already_found(&word) {
        return Err(Rejection::DuplicateWord(word));
    }

    if !oracle.is_word(&word) {
        return Err(Rejection::NotAWord(word));
    }

    if !can_form(&word, pool) {
        return Err(Rejection::CannotForm(word));
    }

    let points = score(&word);
    Ok((word, points))
}
