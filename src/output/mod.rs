//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_game_report, print_leaderboard, print_pool_analysis, print_survey_statistics,
};
