//! Risk level classification.

use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumString};

use crate::config::{LOW_RISK_MAX_SCORE, MEDIUM_RISK_MAX_SCORE};

/// Three-way bucketing of a 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

// Accepts "low", "LOW", "Low", ... since history records come from the service.
impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown risk level: {raw}")))
    }
}

/// Classifies a risk score.
///
/// `score <= 30` is Low, `30 < score <= 70` is Medium, anything above is High.
/// NaN is treated as 0, so the function is total.
pub fn classify(score: f64) -> RiskLevel {
    let score = if score.is_nan() { 0.0 } else { score };
    if score <= LOW_RISK_MAX_SCORE {
        RiskLevel::Low
    } else if score <= MEDIUM_RISK_MAX_SCORE {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Classifies an optional score, treating an absent score as 0.
pub fn classify_optional(score: Option<f64>) -> RiskLevel {
    classify(score.unwrap_or(0.0))
}
