use std::collections::HashSet;

use super::types::{CombinedTable, CompetitionTable, FieldRule};
use super::ScoringTables;

/// Validate coefficient tables at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_tables(tables: &ScoringTables) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for table in [&tables.men_combined, &tables.women_combined] {
        validate_combined(table, &mut errors);
    }
    for table in [
        &tables.men_competition,
        &tables.women_competition,
        &tables.youth_u14_u16,
        &tables.youth_u8_u12,
    ] {
        validate_competition(table, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_combined(table: &CombinedTable, errors: &mut Vec<String>) {
    let mut keys: Vec<_> = table.events.keys().collect();
    keys.sort();
    for key in keys {
        let coeff = &table.events[key];
        if !(coeff.a > 0.0) {
            errors.push(format!("{}.{}: A must be positive", table.name, key));
        }
        if coeff.c == 1.0 {
            errors.push(format!("{}.{}: exponent C must not be 1", table.name, key));
        }
    }
    check_display_order(table.name, &table.display_order, |k| table.get(k).is_some(), errors);
}

fn validate_competition(table: &CompetitionTable, errors: &mut Vec<String>) {
    let mut run_keys: Vec<_> = table.run_events.keys().collect();
    run_keys.sort();
    for key in run_keys {
        if table.field_events.contains_key(key) {
            errors.push(format!(
                "{}.{}: listed as both running and field event",
                table.name, key
            ));
        }
        if !(table.run_events[key].a > 0.0) {
            errors.push(format!("{}.{}: A must be positive", table.name, key));
        }
    }

    let mut field_keys: Vec<_> = table.field_events.keys().collect();
    field_keys.sort();
    for key in field_keys {
        let rule = &table.field_events[key];
        if let Some(threshold) = rule.threshold() {
            if !(threshold > 0.0) {
                errors.push(format!(
                    "{}.{}: threshold must be positive",
                    table.name, key
                ));
            }
        }
        let positive = match rule {
            FieldRule::Sqrt(pair) => pair.a > 0.0,
            FieldRule::SplitSqrt {
                at_or_below, above, ..
            } => at_or_below.a > 0.0 && above.a > 0.0,
            FieldRule::Piecewise(rule) => rule.above.a > 0.0,
        };
        if !positive {
            errors.push(format!("{}.{}: A must be positive", table.name, key));
        }
    }

    check_display_order(table.name, &table.display_order, |k| table.contains(k), errors);
}

fn check_display_order<F>(name: &str, order: &[&'static str], known: F, errors: &mut Vec<String>)
where
    F: Fn(&str) -> bool,
{
    let mut seen = HashSet::new();
    for &key in order {
        if !known(key) {
            errors.push(format!("{}: display order names unknown event '{}'", name, key));
        }
        if !seen.insert(key) {
            errors.push(format!("{}: display order repeats '{}'", name, key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{EventCoefficient, LinearCoefficients};

    #[test]
    fn test_standard_tables_are_valid() {
        assert!(validate_tables(&ScoringTables::standard()).is_ok());
    }

    #[test]
    fn test_non_positive_a_rejected() {
        let mut tables = ScoringTables::standard();
        tables
            .men_competition
            .run_events
            .insert("60m", LinearCoefficients::new(0.0, 10.0));
        let errors = validate_tables(&tables).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("men competition.60m"));
    }

    #[test]
    fn test_linear_exponent_rejected() {
        let mut tables = ScoringTables::standard();
        tables
            .women_combined
            .events
            .insert("100m", EventCoefficient::track(17.857, 21.0, 1.0));
        let errors = validate_tables(&tables).unwrap_err();
        assert!(errors[0].contains("exponent C"));
    }

    #[test]
    fn test_display_order_must_reference_known_events() {
        let mut tables = ScoringTables::standard();
        tables.youth_u8_u12.display_order.push("marathon");
        let errors = validate_tables(&tables).unwrap_err();
        assert!(errors[0].contains("unknown event 'marathon'"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut tables = ScoringTables::standard();
        tables.youth_u8_u12.display_order.push("marathon");
        tables.youth_u8_u12.display_order.push("60m");
        tables
            .youth_u14_u16
            .field_events
            .insert("60m", crate::tables::FieldRule::Sqrt(LinearCoefficients::new(1.0, 1.0)));
        let errors = validate_tables(&tables).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
