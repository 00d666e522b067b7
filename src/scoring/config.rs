use serde::{Deserialize, Serialize};

/// What to do with a textual hourly rate that doesn't parse as a number.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RateParsing {
    /// Treat the rate as unknown and skip the wage check.
    #[default]
    Skip,
    /// Score the rate as 0.0, which always fails the wage check.
    Zero,
}

/// Thresholds for the hours and wage checks.
///
/// Example YAML:
/// ```yaml
/// policy:
///   max_overtime: 8
///   min_wage: 6.0
///   rate_parsing: skip
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PolicyConstants {
    /// Worked minus contracted hours still considered acceptable (inclusive, default: 8)
    #[serde(default = "default_max_overtime")]
    pub max_overtime: f64,

    /// Lowest acceptable hourly rate (inclusive, default: 6.0)
    #[serde(default = "default_min_wage")]
    pub min_wage: f64,

    #[serde(default)]
    pub rate_parsing: RateParsing,
}

fn default_max_overtime() -> f64 {
    8.0
}

fn default_min_wage() -> f64 {
    6.0
}

impl Default for PolicyConstants {
    fn default() -> Self {
        Self {
            max_overtime: default_max_overtime(),
            min_wage: default_min_wage(),
            rate_parsing: RateParsing::default(),
        }
    }
}
