use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scoring category. Each maps to exactly one coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Decathlon-style combined events, men
    SeniorMenCombined,
    /// Heptathlon-style combined events, women
    SeniorWomenCombined,
    /// Men's competition: masters, seniors, U20, U18
    MenCompetition,
    /// Women's competition: masters, seniors, U20, U18
    WomenCompetition,
    /// Boys and girls U14/U16 competition
    #[serde(rename = "youth-u14-u16-competition")]
    #[value(name = "youth-u14-u16-competition")]
    YouthU14U16Competition,
    /// Boys and girls U8/U9/U10/U12 competition
    #[serde(rename = "youth-u8-u12-competition")]
    #[value(name = "youth-u8-u12-competition")]
    YouthU8toU12Competition,
}

/// Selects the combined-event table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Men,
    Women,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::SeniorMenCombined,
        Category::SeniorWomenCombined,
        Category::MenCompetition,
        Category::WomenCompetition,
        Category::YouthU14U16Competition,
        Category::YouthU8toU12Competition,
    ];

    /// Human-readable name as printed on score sheets
    pub fn label(&self) -> &'static str {
        match self {
            Category::SeniorMenCombined => "Senior men combined events",
            Category::SeniorWomenCombined => "Senior women combined events",
            Category::MenCompetition => "Men masters, senior, U20, U18 competition",
            Category::WomenCompetition => "Women masters, senior, U20, U18 competition",
            Category::YouthU14U16Competition => "U14/U16 competition",
            Category::YouthU8toU12Competition => "U8/U9/U10/U12 competition",
        }
    }

    /// Configuration / CLI spelling
    pub fn key(&self) -> &'static str {
        match self {
            Category::SeniorMenCombined => "senior-men-combined",
            Category::SeniorWomenCombined => "senior-women-combined",
            Category::MenCompetition => "men-competition",
            Category::WomenCompetition => "women-competition",
            Category::YouthU14U16Competition => "youth-u14-u16-competition",
            Category::YouthU8toU12Competition => "youth-u8-u12-competition",
        }
    }

    /// `Some` for the combined-event categories
    pub fn combined_gender(&self) -> Option<Gender> {
        match self {
            Category::SeniorMenCombined => Some(Gender::Men),
            Category::SeniorWomenCombined => Some(Gender::Women),
            Category::MenCompetition
            | Category::WomenCompetition
            | Category::YouthU14U16Competition
            | Category::YouthU8toU12Competition => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
