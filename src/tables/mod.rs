pub mod combined;
pub mod competition;
pub mod labels;
pub mod types;
pub mod validation;

pub use labels::event_label;
pub use types::{
    CombinedTable, CompetitionTable, EventCoefficient, FieldRule, FormulaKind,
    LinearCoefficients, LinearRamp, PiecewiseRule,
};
pub use validation::validate_tables;

use crate::category::{Category, Gender};
use crate::performance::UnitKind;

/// Every coefficient table, built once and passed to the scorers.
#[derive(Debug, Clone)]
pub struct ScoringTables {
    pub men_combined: CombinedTable,
    pub women_combined: CombinedTable,
    pub men_competition: CompetitionTable,
    pub women_competition: CompetitionTable,
    pub youth_u14_u16: CompetitionTable,
    pub youth_u8_u12: CompetitionTable,
}

/// The table behind a category.
#[derive(Debug, Clone, Copy)]
pub enum CategoryTable<'a> {
    Combined(&'a CombinedTable),
    Competition(&'a CompetitionTable),
}

impl<'a> CategoryTable<'a> {
    pub fn name(self) -> &'static str {
        match self {
            CategoryTable::Combined(t) => t.name,
            CategoryTable::Competition(t) => t.name,
        }
    }

    pub fn display_order(self) -> &'a [&'static str] {
        match self {
            CategoryTable::Combined(t) => &t.display_order,
            CategoryTable::Competition(t) => &t.display_order,
        }
    }

    /// Unit the user is expected to enter for `event`
    pub fn unit(self, event: &str) -> Option<UnitKind> {
        match self {
            CategoryTable::Combined(t) => t.get(event).map(|c| c.unit),
            CategoryTable::Competition(t) => t.unit(event),
        }
    }
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoringTables {
    /// The published coefficient set
    pub fn standard() -> Self {
        Self {
            men_combined: combined::senior_men(),
            women_combined: combined::senior_women(),
            men_competition: competition::men(),
            women_competition: competition::women(),
            youth_u14_u16: competition::youth_u14_u16(),
            youth_u8_u12: competition::youth_u8_u12(),
        }
    }

    pub fn combined(&self, gender: Gender) -> &CombinedTable {
        match gender {
            Gender::Men => &self.men_combined,
            Gender::Women => &self.women_combined,
        }
    }

    pub fn table(&self, category: Category) -> CategoryTable<'_> {
        match category {
            Category::SeniorMenCombined => CategoryTable::Combined(&self.men_combined),
            Category::SeniorWomenCombined => CategoryTable::Combined(&self.women_combined),
            Category::MenCompetition => CategoryTable::Competition(&self.men_competition),
            Category::WomenCompetition => CategoryTable::Competition(&self.women_competition),
            Category::YouthU14U16Competition => CategoryTable::Competition(&self.youth_u14_u16),
            Category::YouthU8toU12Competition => CategoryTable::Competition(&self.youth_u8_u12),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_table() {
        let tables = ScoringTables::standard();
        for category in Category::ALL {
            assert!(!tables.table(category).display_order().is_empty());
        }
    }

    #[test]
    fn test_combined_selection_matches_category() {
        let tables = ScoringTables::standard();
        assert!(matches!(
            tables.table(Category::SeniorWomenCombined),
            CategoryTable::Combined(t) if std::ptr::eq(t, tables.combined(Gender::Women))
        ));
    }

    #[test]
    fn test_unit_lookup_through_category() {
        let tables = ScoringTables::standard();
        let men = tables.table(Category::SeniorMenCombined);
        assert_eq!(men.unit("hoog"), Some(UnitKind::DistanceCentimeters));
        let youth = tables.table(Category::YouthU8toU12Competition);
        assert_eq!(youth.unit("hoog"), Some(UnitKind::DistanceMeters));
        assert_eq!(youth.unit("polsstok"), None);
    }

    #[test]
    fn test_tables_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScoringTables>();
    }
}
