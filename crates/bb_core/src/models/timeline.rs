use serde::{Deserialize, Serialize};

use super::situation::BaseState;

/// One scoring-relevant plate appearance supplied by the caller, in
/// real game chronology. The aggregator owns the running score; each
/// event only reports how many runs it added for each side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringEvent {
    pub inning: u8,
    pub is_top_half: bool,
    pub outs: u8,
    pub base_state: BaseState,
    /// Short description for charts, e.g. "Two-run homer".
    pub label: String,
    #[serde(default)]
    pub home_runs_scored: u32,
    #[serde(default)]
    pub away_runs_scored: u32,
}

/// One charted point of the win-probability timeline. Probabilities are
/// always from the home team's perspective; `away_wp` is the complement
/// of `home_wp_after`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelinePoint {
    pub inning: u8,
    pub is_top_half: bool,
    pub label: String,
    pub home_wp_before: u8,
    pub home_wp_after: u8,
    pub away_wp: u8,
    pub leverage_index: f64,
    /// home_wp_after - home_wp_before.
    pub delta: i16,
}

/// Aggregated win-probability chart for one game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameTimeline {
    pub points: Vec<TimelinePoint>,
    /// Highest home win probability reached (pregame baseline included).
    pub high_point: u8,
    /// Lowest home win probability reached (pregame baseline included).
    pub low_point: u8,
    /// Largest-magnitude single-event delta, sign preserved.
    pub biggest_swing: i16,
}
