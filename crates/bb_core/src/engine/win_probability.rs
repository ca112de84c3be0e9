//! Logistic win-probability model
//!
//! Combines score differential, run expectancy, and innings remaining
//! into a sigmoid win probability for the perspective team. The weights
//! below are fixed calibration parameters fit against historical game
//! logs; they must not be re-tuned, and clamp/rounding order is part of
//! the contract.

use crate::models::GameSituation;

const SCORE_DIFF_WEIGHT: f64 = 0.15;
const RUN_EXPECTANCY_WEIGHT: f64 = 0.08;
const INNINGS_LEFT_WEIGHT: f64 = 0.02;
const HOME_FIELD_BONUS: f64 = 0.12;
const ENDGAME_URGENCY: f64 = 1.5;
const REGULATION_INNINGS: u8 = 9;

/// Win probability as an integer percent, always within 1..=99.
///
/// `_li` is part of the evaluator seam for callers that feed all three
/// situational values through one signature; the logistic model itself
/// is driven by score, run expectancy, and innings remaining only.
pub fn win_probability(situation: &GameSituation, re: f64, _li: f64) -> u8 {
    let innings_left = REGULATION_INNINGS.saturating_sub(situation.inning) as f64;
    let urgency =
        if situation.inning >= REGULATION_INNINGS { ENDGAME_URGENCY } else { 1.0 };

    let logit = (situation.score_diff as f64 * SCORE_DIFF_WEIGHT
        + re * RUN_EXPECTANCY_WEIGHT
        + innings_left * INNINGS_LEFT_WEIGHT)
        * urgency;
    let home_bonus = if situation.is_home { HOME_FIELD_BONUS } else { -HOME_FIELD_BONUS };

    let wp = sigmoid(logit + home_bonus).clamp(0.01, 0.99);
    ((wp * 100.0).round() as u8).clamp(1, 99)
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
