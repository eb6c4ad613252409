//! Command implementations

pub mod possible;
pub mod simple;
pub mod survey;

pub use possible::{PoolAnalysis, analyze_pool};
pub use simple::run_simple;
pub use survey::{SurveyStatistics, run_survey};
