//! Interactive TUI for solo and head-to-head play

pub mod app;
mod rendering;

pub use app::{App, run_tui};
