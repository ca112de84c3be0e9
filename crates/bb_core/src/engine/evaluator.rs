//! Situation evaluator
//!
//! Facade over the lookup tables and the win-probability model. Every
//! call is an independent, deterministic computation; there is no cache
//! and no hidden state, so concurrent callers need no coordination.

use crate::models::{Excitement, GameSituation, WinExpectancyResult};

use super::tables::{leverage_index, run_expectancy};
use super::win_probability::win_probability;

/// Maps a leverage-index value to a coarse excitement tier.
pub struct ExcitementClassifier;

impl ExcitementClassifier {
    pub fn classify(li: f64) -> Excitement {
        if li >= 2.5 {
            Excitement::Extreme
        } else if li >= 1.5 {
            Excitement::High
        } else if li >= 0.8 {
            Excitement::Medium
        } else {
            Excitement::Low
        }
    }
}

pub struct SituationEvaluator;

impl SituationEvaluator {
    /// Evaluate one game situation into the full dashboard payload:
    /// win probability, leverage index, run expectancy, excitement tier,
    /// and the human-readable situation line.
    pub fn evaluate(situation: &GameSituation) -> WinExpectancyResult {
        let outs = situation.outs.min(2);
        let re = run_expectancy(outs, situation.base_state);
        let li = leverage_index(situation.inning, situation.score_diff);
        let wp = win_probability(situation, re, li);

        WinExpectancyResult {
            win_probability: wp,
            leverage_index: round2(li),
            run_expectancy: round2(re),
            situation: describe(situation, outs),
            excitement: ExcitementClassifier::classify(li),
        }
    }
}

/// Convenience free function mirroring the evaluator's public seam.
pub fn evaluate(situation: &GameSituation) -> WinExpectancyResult {
    SituationEvaluator::evaluate(situation)
}

fn describe(situation: &GameSituation, outs: u8) -> String {
    let half = if situation.is_top_half { "Top" } else { "Bot" };
    format!(
        "{} {}, {} out, {}",
        half,
        situation.inning,
        outs,
        situation.base_state.label()
    )
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BaseState;

    fn tense_seventh() -> GameSituation {
        GameSituation {
            inning: 7,
            is_top_half: false,
            outs: 1,
            base_state: BaseState::FirstSecond,
            score_diff: -1,
            is_home: true,
        }
    }

    #[test]
    fn classifier_thresholds() {
        assert_eq!(ExcitementClassifier::classify(0.3), Excitement::Low);
        assert_eq!(ExcitementClassifier::classify(0.8), Excitement::Medium);
        assert_eq!(ExcitementClassifier::classify(1.5), Excitement::High);
        assert_eq!(ExcitementClassifier::classify(2.49), Excitement::High);
        assert_eq!(ExcitementClassifier::classify(2.5), Excitement::Extreme);
        assert_eq!(ExcitementClassifier::classify(3.5), Excitement::Extreme);
    }

    #[test]
    fn evaluates_the_tense_seventh() {
        let result = evaluate(&tense_seventh());
        assert_eq!(result.run_expectancy, 0.89);
        assert_eq!(result.leverage_index, 1.8);
        assert_eq!(result.win_probability, 52);
        assert_eq!(result.excitement, Excitement::High);
        assert_eq!(result.situation, "Bot 7, 1 out, runners on 1st and 2nd");
    }

    #[test]
    fn evaluation_is_idempotent() {
        let situation = tense_seventh();
        assert_eq!(evaluate(&situation), evaluate(&situation));
    }

    #[test]
    fn out_of_range_outs_are_clamped_in_the_description() {
        let mut situation = tense_seventh();
        situation.outs = 7;
        let result = evaluate(&situation);
        assert_eq!(result.situation, "Bot 7, 2 out, runners on 1st and 2nd");
        assert_eq!(result.run_expectancy, 0.42);
    }

    #[test]
    fn top_half_description() {
        let situation = GameSituation {
            inning: 1,
            is_top_half: true,
            outs: 0,
            base_state: BaseState::Empty,
            score_diff: 0,
            is_home: false,
        };
        assert_eq!(evaluate(&situation).situation, "Top 1, 0 out, bases empty");
    }
}
