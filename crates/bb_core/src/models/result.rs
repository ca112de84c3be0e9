use serde::{Deserialize, Serialize};

/// Coarse excitement tier for a leverage-index value, used by dashboard
/// views to color the situation panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Excitement {
    Low,
    Medium,
    High,
    Extreme,
}

/// Output of a single situation evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WinExpectancyResult {
    /// Integer percent, always within 1..=99.
    pub win_probability: u8,
    /// Rounded to 2 decimal places.
    pub leverage_index: f64,
    /// Rounded to 2 decimal places.
    pub run_expectancy: f64,
    /// e.g. "Bot 7, 1 out, runners on 1st and 2nd"
    pub situation: String,
    pub excitement: Excitement,
}
