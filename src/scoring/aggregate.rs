use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::combined::score_combined;
use super::competition::score_event;
use super::Points;
use crate::category::Category;
use crate::error::ScoringError;
use crate::performance::RawPerformance;
use crate::tables::{CategoryTable, ScoringTables};

/// One competitor's results, keyed by event.
pub type PerformanceInput = BTreeMap<String, RawPerformance>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventScore {
    pub event: String,
    pub points: Points,
}

/// Per-event points in display order, plus their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub per_event: Vec<EventScore>,
    pub total: Points,
}

impl ScoreResult {
    pub fn get(&self, event: &str) -> Option<Points> {
        self.per_event
            .iter()
            .find(|s| s.event == event)
            .map(|s| s.points)
    }

    fn push(&mut self, event: &str, points: Points) {
        self.total = self.total.saturating_add(points);
        self.per_event.push(EventScore {
            event: event.to_string(),
            points,
        });
    }
}

/// An event that could not be scored and counted as 0.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFailure {
    pub event: String,
    pub error: ScoringError,
}

/// Score for one event in any category.
pub fn score_for_category(
    tables: &ScoringTables,
    category: Category,
    event: &str,
    raw: &RawPerformance,
) -> Result<Points, ScoringError> {
    match tables.table(category) {
        CategoryTable::Combined(table) => score_combined(table, event, raw),
        CategoryTable::Competition(table) => score_event(table, event, raw),
    }
}

/// Score every submitted event of a category and sum them.
///
/// Events are visited in the category's display order. Events missing from
/// `performances` are skipped; the first scoring error aborts.
pub fn total_score(
    tables: &ScoringTables,
    performances: &PerformanceInput,
    category: Category,
) -> Result<ScoreResult, ScoringError> {
    let mut result = ScoreResult::default();
    for &event in tables.table(category).display_order() {
        if let Some(raw) = performances.get(event) {
            let points = score_for_category(tables, category, event, raw)
                .map_err(|e| e.for_event(event))?;
            debug!(%category, event, %raw, points, "scored event");
            result.push(event, points);
        }
    }
    Ok(result)
}

/// Like [`total_score`], but an event that fails to score counts as 0 and
/// is reported instead of aborting the total.
pub fn total_score_lenient(
    tables: &ScoringTables,
    performances: &PerformanceInput,
    category: Category,
) -> (ScoreResult, Vec<EventFailure>) {
    let mut result = ScoreResult::default();
    let mut failures = Vec::new();
    for &event in tables.table(category).display_order() {
        let Some(raw) = performances.get(event) else {
            continue;
        };
        match score_for_category(tables, category, event, raw) {
            Ok(points) => {
                debug!(%category, event, %raw, points, "scored event");
                result.push(event, points);
            }
            Err(error) => {
                warn!(%category, event, %raw, %error, "counting event as 0 points");
                result.push(event, 0);
                failures.push(EventFailure {
                    event: event.to_string(),
                    error,
                });
            }
        }
    }
    (result, failures)
}

/// Submitted event keys the category will never score.
pub fn unrecognized_events(
    tables: &ScoringTables,
    performances: &PerformanceInput,
    category: Category,
) -> Vec<String> {
    let order = tables.table(category).display_order();
    performances
        .keys()
        .filter(|key| !order.iter().any(|known| *known == key.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pairs: &[(&str, &str)]) -> PerformanceInput {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), RawPerformance::from(*v)))
            .collect()
    }

    #[test]
    fn test_partial_entry_only_lists_submitted_events() {
        let tables = ScoringTables::standard();
        let perfs = input(&[("60m", "9.0"), ("bal", "30")]);
        let result = total_score(&tables, &perfs, Category::YouthU8toU12Competition).unwrap();

        assert_eq!(result.per_event.len(), 2);
        assert_eq!(result.get("60m"), Some(649));
        assert_eq!(result.get("bal"), Some(444));
        assert_eq!(result.get("ver"), None);
        assert_eq!(result.total, 649 + 444);
    }

    #[test]
    fn test_follows_display_order_not_input_order() {
        let tables = ScoringTables::standard();
        // BTreeMap would yield "100m", "hoog", "kogel", "ver"
        let perfs = input(&[("kogel", "14"), ("hoog", "1.90"), ("100m", "11.2"), ("ver", "6.8")]);
        let result = total_score(&tables, &perfs, Category::SeniorMenCombined).unwrap();
        let events: Vec<_> = result.per_event.iter().map(|s| s.event.as_str()).collect();
        assert_eq!(events, vec!["100m", "hoog", "ver", "kogel"]);
    }

    #[test]
    fn test_empty_input() {
        let tables = ScoringTables::standard();
        let result = total_score(&tables, &PerformanceInput::new(), Category::WomenCompetition).unwrap();
        assert!(result.per_event.is_empty());
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_keys_outside_category_are_skipped() {
        let tables = ScoringTables::standard();
        let perfs = input(&[("100m", "12.0"), ("bal", "30")]);
        let result = total_score(&tables, &perfs, Category::MenCompetition).unwrap();
        assert_eq!(result.per_event.len(), 1);
        assert_eq!(
            unrecognized_events(&tables, &perfs, Category::MenCompetition),
            vec!["bal".to_string()]
        );
    }

    #[test]
    fn test_strict_total_reports_event() {
        let tables = ScoringTables::standard();
        let perfs = input(&[("60m", "9.0"), ("ver", "far")]);
        let err = total_score(&tables, &perfs, Category::YouthU8toU12Competition).unwrap_err();
        match err {
            ScoringError::Event { event, source } => {
                assert_eq!(event, "ver");
                assert!(matches!(*source, ScoringError::MalformedPerformance { .. }));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_lenient_total_counts_failures_as_zero() {
        let tables = ScoringTables::standard();
        let perfs = input(&[("60m", "9.0"), ("ver", "far")]);
        let (result, failures) =
            total_score_lenient(&tables, &perfs, Category::YouthU8toU12Competition);
        assert_eq!(result.get("ver"), Some(0));
        assert_eq!(result.total, 649);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].event, "ver");
    }

    #[test]
    fn test_repeat_scoring_is_identical() {
        let tables = ScoringTables::standard();
        let perfs = input(&[("hoog", "1.40"), ("800m", "2:20.00")]);
        let first = total_score(&tables, &perfs, Category::WomenCompetition).unwrap();
        let second = total_score(&tables, &perfs, Category::WomenCompetition).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_score_for_category_dispatch() {
        let tables = ScoringTables::standard();
        let raw = RawPerformance::from("11.0");
        assert_eq!(
            score_for_category(&tables, Category::SeniorMenCombined, "100m", &raw).unwrap(),
            861
        );
        // combined tables reject unknown events, competition tables do not
        assert!(score_for_category(&tables, Category::SeniorMenCombined, "bal", &raw).is_err());
        assert_eq!(
            score_for_category(&tables, Category::MenCompetition, "bal", &raw).unwrap(),
            0
        );
    }
}
