//! Combined-event (decathlon / heptathlon) coefficients.
//!
//! Jumps are scored in centimeters, throws in meters, runs in seconds.

use super::types::{CombinedTable, EventCoefficient};

pub fn senior_men() -> CombinedTable {
    CombinedTable::from_ordered(
        "senior men combined",
        &[
            ("60m", EventCoefficient::track(58.01500, 11.5, 1.810)),
            ("100m", EventCoefficient::track(25.43470, 18.0, 1.810)),
            ("200m", EventCoefficient::track(5.84250, 38.0, 1.810)),
            ("400m", EventCoefficient::track(1.53775, 82.0, 1.810)),
            ("1000m", EventCoefficient::track(0.08713, 305.5, 1.850)),
            ("1500m", EventCoefficient::track(0.03768, 480.0, 1.850)),
            ("60m_h", EventCoefficient::track(20.51730, 15.5, 1.920)),
            ("110m_h", EventCoefficient::track(5.74352, 28.5, 1.920)),
            ("hoog", EventCoefficient::jump(0.8465, 75.0, 1.42)),
            ("polsstok", EventCoefficient::jump(0.2797, 100.0, 1.35)),
            ("ver", EventCoefficient::jump(0.14354, 220.0, 1.40)),
            ("kogel", EventCoefficient::throw(51.39, 1.5, 1.05)),
            ("discus", EventCoefficient::throw(12.91, 4.0, 1.10)),
            ("kogelslingeren", EventCoefficient::throw(13.0449, 7.0, 1.05)),
            ("speer", EventCoefficient::throw(10.14, 7.0, 1.08)),
            ("gewichtwerpen", EventCoefficient::throw(47.8338, 1.5, 1.05)),
        ],
    )
}

pub fn senior_women() -> CombinedTable {
    CombinedTable::from_ordered(
        "senior women combined",
        &[
            ("60m", EventCoefficient::track(46.08490, 13.0, 1.810)),
            ("100m", EventCoefficient::track(17.85700, 21.0, 1.810)),
            ("200m", EventCoefficient::track(4.99087, 42.5, 1.810)),
            ("400m", EventCoefficient::track(1.34285, 91.7, 1.810)),
            ("800m", EventCoefficient::track(0.11193, 254.0, 1.880)),
            ("1000m", EventCoefficient::track(0.07068, 337.0, 1.880)),
            ("1500m", EventCoefficient::track(0.02883, 535.0, 1.880)),
            ("60m_h", EventCoefficient::track(20.04790, 17.0, 1.835)),
            ("100m_h", EventCoefficient::track(9.23076, 26.7, 1.835)),
            ("hoog", EventCoefficient::jump(1.84523, 75.0, 1.348)),
            ("polsstok", EventCoefficient::jump(0.44125, 100.0, 1.35)),
            ("ver", EventCoefficient::jump(0.188807, 210.0, 1.41)),
            ("kogel", EventCoefficient::throw(56.0211, 1.5, 1.05)),
            ("discus", EventCoefficient::throw(12.3311, 3.0, 1.10)),
            ("kogelslingeren", EventCoefficient::throw(17.5458, 6.0, 1.05)),
            ("speer", EventCoefficient::throw(15.9803, 3.8, 1.04)),
            ("gewichtwerpen", EventCoefficient::throw(52.1403, 1.5, 1.05)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::UnitKind;
    use crate::tables::FormulaKind;

    #[test]
    fn test_men_table_shape() {
        let men = senior_men();
        assert_eq!(men.display_order.len(), 16);
        assert_eq!(men.display_order[0], "60m");
        assert_eq!(men.display_order[15], "gewichtwerpen");
        assert!(men.get("800m").is_none());
    }

    #[test]
    fn test_women_table_has_hurdles_and_800m() {
        let women = senior_women();
        assert_eq!(women.display_order.len(), 17);
        assert!(women.get("100m_h").is_some());
        assert!(women.get("800m").is_some());
        assert!(women.get("110m_h").is_none());
    }

    #[test]
    fn test_jumps_are_centimeters() {
        let men = senior_men();
        for key in ["hoog", "polsstok", "ver"] {
            let coeff = men.get(key).unwrap();
            assert_eq!(coeff.unit, UnitKind::DistanceCentimeters);
            assert_eq!(coeff.formula, FormulaKind::Field);
        }
        assert_eq!(men.get("kogel").unwrap().unit, UnitKind::DistanceMeters);
    }
}
