//! Core domain types for Word Rush
//!
//! This module contains the fundamental game types: words, letter pools,
//! the formation check, scoring and player identity.
//! Everything here is pure and deterministic.

mod player;
mod pool;
mod scoring;
mod word;

pub use player::PlayerId;
pub use pool::{LetterPool, SelectError, Selection, UsedLetter, can_form};
pub use scoring::{COMBO_LENGTH, MAX_MULTIPLIER, TOP_TIER_LENGTH, next_multiplier, score, tier};
pub use word::{LetterCounts, Word, WordError};
