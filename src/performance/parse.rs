use super::types::{RawPerformance, UnitKind};
use crate::error::ScoringError;

/// Parse a time into seconds.
///
/// Accepts a number, plain seconds (`"10.5"`), `"M:SS.ff"` or `"H:MM:SS.ff"`.
pub fn parse_time(raw: &RawPerformance) -> Result<f64, ScoringError> {
    let s = match raw {
        RawPerformance::Number(n) => return finite(*n, raw),
        RawPerformance::Text(s) => s.trim(),
    };

    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [sec] => parse_decimal(sec, raw),
        [m, sec] => Ok(parse_decimal(m, raw)? * 60.0 + parse_decimal(sec, raw)?),
        [h, m, sec] => Ok(parse_decimal(h, raw)? * 3600.0
            + parse_decimal(m, raw)? * 60.0
            + parse_decimal(sec, raw)?),
        _ => Err(ScoringError::malformed(raw.to_string())),
    }
}

/// Parse a plain decimal distance in meters.
pub fn parse_distance(raw: &RawPerformance) -> Result<f64, ScoringError> {
    match raw {
        RawPerformance::Number(n) => finite(*n, raw),
        RawPerformance::Text(s) => parse_decimal(s, raw),
    }
}

/// Convert a raw performance into the unit a formula expects.
pub fn to_canonical_unit(raw: &RawPerformance, unit: UnitKind) -> Result<f64, ScoringError> {
    match unit {
        UnitKind::TimeSeconds => parse_time(raw),
        UnitKind::DistanceMeters => parse_distance(raw),
        UnitKind::DistanceCentimeters => Ok(parse_distance(raw)? * 100.0),
    }
}

fn parse_decimal(s: &str, raw: &RawPerformance) -> Result<f64, ScoringError> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| ScoringError::malformed(raw.to_string()))?;
    finite(value, raw)
}

// "NaN" and "inf" parse as f64 but are never a performance
fn finite(value: f64, raw: &RawPerformance) -> Result<f64, ScoringError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::malformed(raw.to_string()))
    }
}
