//! Historical lookup tables
//!
//! Two constant tables drive the situational evaluator:
//! - run expectancy by base-out state (3 out counts x 8 base states)
//! - leverage multiplier by inning phase and score-margin bucket
//!
//! Both are read-only league-average calibration data, built once at
//! startup and shared freely across threads.

use once_cell::sync::Lazy;

use crate::models::{BaseState, InningPhase, LeverageBucket};

/// Expected runs for the remainder of a half-inning, indexed by
/// [outs][BaseState::index()]. Columns: empty, 1st, 2nd, 3rd, 1st+2nd,
/// 1st+3rd, 2nd+3rd, loaded.
const RUN_EXPECTANCY_MATRIX: [[f64; 8]; 3] = [
    [0.48, 0.85, 1.06, 1.30, 1.39, 1.71, 1.92, 2.21],
    [0.25, 0.50, 0.64, 0.95, 0.89, 1.13, 1.35, 1.51],
    [0.10, 0.22, 0.31, 0.35, 0.42, 0.48, 0.52, 0.75],
];

/// Leverage multiplier indexed by [InningPhase::index()][LeverageBucket::index()].
/// Columns: blowout, comfortable, close, tied. Non-decreasing down each
/// column as the game gets later.
const LEVERAGE_MATRIX: [[f64; 4]; 4] = [
    [0.3, 0.5, 0.9, 1.0],
    [0.4, 0.7, 1.2, 1.4],
    [0.5, 0.9, 1.8, 2.2],
    [0.6, 1.2, 2.8, 3.5],
];

/// Run-expectancy lookup over the 24 base-out states.
#[derive(Debug)]
pub struct RunExpectancyTable {
    matrix: [[f64; 8]; 3],
}

impl RunExpectancyTable {
    fn new() -> Self {
        Self { matrix: RUN_EXPECTANCY_MATRIX }
    }

    /// Total lookup: `outs` outside 0..=2 is clamped, never rejected.
    pub fn lookup(&self, outs: u8, state: BaseState) -> f64 {
        let outs = outs.min(2) as usize;
        self.matrix[outs][state.index()]
    }
}

/// Leverage-index lookup over inning phase and score-margin bucket.
#[derive(Debug)]
pub struct LeverageIndexTable {
    matrix: [[f64; 4]; 4],
}

impl LeverageIndexTable {
    fn new() -> Self {
        Self { matrix: LEVERAGE_MATRIX }
    }

    pub fn lookup(&self, inning: u8, score_diff: i32) -> f64 {
        let phase = InningPhase::from_inning(inning);
        let bucket = LeverageBucket::from_score_diff(score_diff);
        self.matrix[phase.index()][bucket.index()]
    }
}

static RUN_EXPECTANCY_TABLE: Lazy<RunExpectancyTable> = Lazy::new(RunExpectancyTable::new);
static LEVERAGE_INDEX_TABLE: Lazy<LeverageIndexTable> = Lazy::new(LeverageIndexTable::new);

/// Expected runs for the rest of the half-inning given the base-out state.
pub fn run_expectancy(outs: u8, state: BaseState) -> f64 {
    RUN_EXPECTANCY_TABLE.lookup(outs, state)
}

/// Leverage multiplier for the current at-bat. No internal rounding;
/// the evaluator rounds to 2 decimals on output.
pub fn leverage_index(inning: u8, score_diff: i32) -> f64 {
    LEVERAGE_INDEX_TABLE.lookup(inning, score_diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn run_expectancy_round_trips_every_base_out_state() {
        for outs in 0..=2u8 {
            for state in BaseState::iter() {
                assert_eq!(
                    run_expectancy(outs, state),
                    RUN_EXPECTANCY_MATRIX[outs as usize][state.index()]
                );
            }
        }
    }

    #[test]
    fn run_expectancy_known_corners() {
        assert_eq!(run_expectancy(0, BaseState::Empty), 0.48);
        assert_eq!(run_expectancy(2, BaseState::Loaded), 0.75);
        assert_eq!(run_expectancy(1, BaseState::FirstSecond), 0.89);
    }

    #[test]
    fn run_expectancy_clamps_outs() {
        assert_eq!(run_expectancy(3, BaseState::Empty), run_expectancy(2, BaseState::Empty));
        assert_eq!(run_expectancy(250, BaseState::Loaded), 0.75);
    }

    #[test]
    fn leverage_extremes() {
        // Early-inning blowout is the floor, tied extra innings the ceiling.
        assert_eq!(leverage_index(1, 9), 0.3);
        assert_eq!(leverage_index(10, 0), 3.5);
    }

    #[test]
    fn leverage_non_decreasing_as_game_gets_later() {
        for diff in [0, 2, 5, 8] {
            // One representative inning per phase, in order.
            let by_phase: Vec<f64> =
                [2, 5, 8, 9].iter().map(|&inning| leverage_index(inning, diff)).collect();
            for pair in by_phase.windows(2) {
                assert!(pair[1] >= pair[0], "leverage dropped late for diff {diff}: {by_phase:?}");
            }
        }
    }

    #[test]
    fn leverage_seventh_inning_one_run_game() {
        assert_eq!(leverage_index(7, -1), 1.8);
    }
}
