pub mod category;
pub mod config;
pub mod error;
pub mod output;
pub mod performance;
pub mod scoring;
pub mod tables;

pub use category::{Category, Gender};
pub use error::ScoringError;
pub use performance::RawPerformance;
pub use scoring::{total_score, total_score_lenient, PerformanceInput, Points, ScoreResult};
pub use tables::ScoringTables;
