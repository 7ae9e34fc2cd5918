use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::scoring::PerformanceInput;

/// User configuration (`~/.config/athletics-points/config.yaml`).
///
/// Example YAML:
/// ```yaml
/// default_category: youth-u8-u12-competition
/// colors: false
/// strict: true
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Category used when neither the command line nor the sheet names one
    #[serde(default)]
    pub default_category: Option<Category>,

    /// Force colored output on or off (default: only on a terminal)
    #[serde(default)]
    pub colors: Option<bool>,

    /// Fail on the first bad performance instead of counting it as 0
    #[serde(default)]
    pub strict: Option<bool>,
}

/// One competitor's score sheet.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoreSheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub athlete: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Event key to performance; blank strings mean "not attempted"
    #[serde(default)]
    pub performances: PerformanceInput,
}

impl ScoreSheet {
    /// Performances with the not-attempted entries removed
    pub fn attempted(&self) -> PerformanceInput {
        self.performances
            .iter()
            .filter(|(_, raw)| !raw.is_blank())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
