//! Persisted player records and the leaderboard
//!
//! Records are read and written through a [`RecordStore`]; ranking is a pure
//! function over a snapshot of them.

mod ranking;
mod record;
mod store;

pub use ranking::{Metric, rank, top};
pub use record::{PlayerRecord, record_result};
pub use store::{JsonFileStore, MemoryStore, RecordStore, StoreError};
