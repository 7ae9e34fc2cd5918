use serde::{Deserialize, Serialize};
use std::fmt;

/// A single result as the athlete or official typed it.
///
/// Sheets may hold either bare numbers (`12.34`) or strings (`"1:02.50"`),
/// so this deserializes untagged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawPerformance {
    Number(f64),
    Text(String),
}

impl RawPerformance {
    /// Blank text means "not attempted"
    pub fn is_blank(&self) -> bool {
        matches!(self, RawPerformance::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for RawPerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawPerformance::Number(n) => write!(f, "{}", n),
            RawPerformance::Text(s) => write!(f, "{}", s.trim()),
        }
    }
}

impl From<&str> for RawPerformance {
    fn from(s: &str) -> Self {
        RawPerformance::Text(s.to_string())
    }
}

impl From<String> for RawPerformance {
    fn from(s: String) -> Self {
        RawPerformance::Text(s)
    }
}

impl From<f64> for RawPerformance {
    fn from(n: f64) -> Self {
        RawPerformance::Number(n)
    }
}

impl From<i32> for RawPerformance {
    fn from(n: i32) -> Self {
        RawPerformance::Number(n as f64)
    }
}

impl From<i64> for RawPerformance {
    fn from(n: i64) -> Self {
        RawPerformance::Number(n as f64)
    }
}

/// Unit a formula expects its input in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    TimeSeconds,
    DistanceMeters,
    /// Entered in meters, scored in centimeters (combined-event jumps)
    DistanceCentimeters,
}

impl UnitKind {
    /// Hint for what the user should type
    pub fn input_hint(&self) -> &'static str {
        match self {
            UnitKind::TimeSeconds => "seconds or m:ss.ff",
            UnitKind::DistanceMeters | UnitKind::DistanceCentimeters => "meters",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_not_attempted() {
        assert!(RawPerformance::from("").is_blank());
        assert!(RawPerformance::from("   ").is_blank());
        assert!(!RawPerformance::from("12.3").is_blank());
        assert!(!RawPerformance::from(0.0).is_blank());
    }

    #[test]
    fn test_deserialize_number_and_text() {
        let yaml = r#"
a: 12.34
b: "1:02.50"
c: 7
"#;
        let parsed: std::collections::BTreeMap<String, RawPerformance> =
            serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(parsed["a"], RawPerformance::Number(12.34));
        assert_eq!(parsed["b"], RawPerformance::Text("1:02.50".to_string()));
        assert_eq!(parsed["c"], RawPerformance::Number(7.0));
    }

    #[test]
    fn test_display_trims_text() {
        assert_eq!(RawPerformance::from(" 1:02.50 ").to_string(), "1:02.50");
        assert_eq!(RawPerformance::from(12.5).to_string(), "12.5");
    }
}
