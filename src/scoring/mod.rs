pub mod aggregate;
pub mod combined;
pub mod competition;

pub use aggregate::{
    score_for_category, total_score, total_score_lenient, unrecognized_events, EventFailure,
    EventScore, PerformanceInput, ScoreResult,
};
pub use combined::score_combined;
pub use competition::score_event;

/// Points are never negative.
pub type Points = u32;

/// Truncate a formula value to whole points, clamping at zero.
pub(crate) fn floor_points(value: f64) -> Points {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        // saturates for absurdly fast times
        value.floor() as Points
    }
}
