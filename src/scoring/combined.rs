use super::floor_points;
use super::Points;
use crate::error::ScoringError;
use crate::performance::{to_canonical_unit, RawPerformance};
use crate::tables::{CombinedTable, EventCoefficient, FormulaKind};

/// Score one combined event (decathlon / heptathlon curve).
///
/// Unknown events are an error here, unlike the competition scorer.
pub fn score_combined(
    table: &CombinedTable,
    event: &str,
    raw: &RawPerformance,
) -> Result<Points, ScoringError> {
    let coeff = table.get(event).ok_or_else(|| ScoringError::UnknownEvent {
        event: event.to_string(),
        table: table.name,
    })?;

    let x = to_canonical_unit(raw, coeff.unit)?;
    if x < 0.0 {
        return Err(ScoringError::InvalidPerformance {
            value: x,
            reason: "performance must not be negative",
        });
    }

    Ok(floor_points(curve_value(coeff, x)))
}

/// `a * (b - x)^c` for track, `a * (x - b)^c` for field.
///
/// A performance at or past the baseline scores nothing; a fractional power
/// of a negative base would otherwise be NaN.
fn curve_value(coeff: &EventCoefficient, x: f64) -> f64 {
    let base = match coeff.formula {
        FormulaKind::Track => coeff.b - x,
        FormulaKind::Field => x - coeff.b,
    };
    if base <= 0.0 {
        return 0.0;
    }
    coeff.a * base.powf(coeff.c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::combined::{senior_men, senior_women};

    fn text(s: &str) -> RawPerformance {
        RawPerformance::from(s)
    }

    #[test]
    fn test_men_100m_regression() {
        // floor(25.4347 * 7^1.81)
        let points = score_combined(&senior_men(), "100m", &text("11.0")).unwrap();
        assert_eq!(points, 861);
    }

    #[test]
    fn test_men_high_jump_uses_centimeters() {
        // floor(0.8465 * (200 - 75)^1.42)
        let points = score_combined(&senior_men(), "hoog", &text("2.00")).unwrap();
        assert_eq!(points, 803);
    }

    #[test]
    fn test_men_shot_put_uses_meters() {
        // floor(51.39 * (15 - 1.5)^1.05)
        let points = score_combined(&senior_men(), "kogel", &RawPerformance::from(15.0)).unwrap();
        assert_eq!(points, 790);
    }

    #[test]
    fn test_women_60m() {
        // floor(46.0849 * (13 - 8.5)^1.81)
        let points = score_combined(&senior_women(), "60m", &text("8.50")).unwrap();
        let expected = (46.08490_f64 * 4.5_f64.powf(1.810)).floor() as u32;
        assert_eq!(points, expected);
    }

    #[test]
    fn test_women_high_jump() {
        // floor(1.84523 * (180 - 75)^1.348)
        let points = score_combined(&senior_women(), "hoog", &text("1.80")).unwrap();
        assert_eq!(points, 978);
    }

    #[test]
    fn test_minute_format_for_middle_distance() {
        let men = senior_men();
        let from_text = score_combined(&men, "1500m", &text("4:30.00")).unwrap();
        let from_number = score_combined(&men, "1500m", &RawPerformance::from(270.0)).unwrap();
        assert_eq!(from_text, from_number);
        assert!(from_text > 0);
    }

    #[test]
    fn test_slower_than_baseline_scores_zero() {
        let points = score_combined(&senior_men(), "100m", &text("18.5")).unwrap();
        assert_eq!(points, 0);
    }

    #[test]
    fn test_exactly_baseline_scores_zero() {
        let points = score_combined(&senior_men(), "100m", &text("18.0")).unwrap();
        assert_eq!(points, 0);
    }

    #[test]
    fn test_short_throw_scores_zero() {
        let points = score_combined(&senior_men(), "discus", &text("3.5")).unwrap();
        assert_eq!(points, 0);
    }

    #[test]
    fn test_unknown_event() {
        let err = score_combined(&senior_men(), "800m", &text("2:00")).unwrap_err();
        assert!(matches!(err, ScoringError::UnknownEvent { ref event, .. } if event == "800m"));
    }

    #[test]
    fn test_malformed_input() {
        let err = score_combined(&senior_men(), "100m", &text("fast")).unwrap_err();
        assert!(matches!(err, ScoringError::MalformedPerformance { .. }));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let err = score_combined(&senior_men(), "ver", &text("-7.0")).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidPerformance { .. }));
    }
}
