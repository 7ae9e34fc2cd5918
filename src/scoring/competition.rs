use super::floor_points;
use super::Points;
use crate::error::ScoringError;
use crate::performance::{parse_distance, parse_time, RawPerformance};
use crate::tables::CompetitionTable;

/// Score one competition event.
///
/// Events the table does not know contribute 0 points instead of an error.
pub fn score_event(
    table: &CompetitionTable,
    event: &str,
    raw: &RawPerformance,
) -> Result<Points, ScoringError> {
    if let Some(pair) = table.run_events.get(event) {
        let t = parse_time(raw)?;
        if t <= 0.0 {
            return Err(ScoringError::InvalidPerformance {
                value: t,
                reason: "time must be positive",
            });
        }
        return Ok(floor_points(pair.over_time(t)));
    }

    if let Some(rule) = table.field_events.get(event) {
        let d = parse_distance(raw)?;
        if d < 0.0 {
            return Err(ScoringError::InvalidPerformance {
                value: d,
                reason: "distance must not be negative",
            });
        }
        return Ok(floor_points(rule.eval(d)));
    }

    Ok(0)
}
