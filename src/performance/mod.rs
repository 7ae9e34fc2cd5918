pub mod parse;
pub mod types;

pub use parse::{parse_distance, parse_time, to_canonical_unit};
pub use types::{RawPerformance, UnitKind};
