//! Word Rush
//!
//! A timed word-formation game: build words from a pool of letters alone or
//! against an opponent on a shared pool.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordrush::core::PlayerId;
//! use wordrush::game::Session;
//! use wordrush::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! let mut session = Session::start(2, PlayerId::from("1"), &dictionary, &mut rand::rng());
//!
//! match session.submit("cat") {
//!     Ok(accepted) => println!("{} scored {}", accepted.word, accepted.points),
//!     Err(rejection) => println!("{rejection}"),
//! }
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Solo and match engines
pub mod game;

// Player records and ranking
pub mod leaderboard;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
