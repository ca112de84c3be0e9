use serde::{Deserialize, Serialize};

/// The 8 runner configurations of a half-inning. Closed set; combined
/// with the 3 out counts this gives the classic 24 base-out states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum BaseState {
    Empty,
    First,
    Second,
    Third,
    FirstSecond,
    FirstThird,
    SecondThird,
    Loaded,
}

impl BaseState {
    /// Stable column index into the run-expectancy matrix.
    pub fn index(self) -> usize {
        match self {
            BaseState::Empty => 0,
            BaseState::First => 1,
            BaseState::Second => 2,
            BaseState::Third => 3,
            BaseState::FirstSecond => 4,
            BaseState::FirstThird => 5,
            BaseState::SecondThird => 6,
            BaseState::Loaded => 7,
        }
    }

    /// Human-readable label used in situation descriptions.
    pub fn label(self) -> &'static str {
        match self {
            BaseState::Empty => "bases empty",
            BaseState::First => "runner on 1st",
            BaseState::Second => "runner on 2nd",
            BaseState::Third => "runner on 3rd",
            BaseState::FirstSecond => "runners on 1st and 2nd",
            BaseState::FirstThird => "runners on 1st and 3rd",
            BaseState::SecondThird => "runners on 2nd and 3rd",
            BaseState::Loaded => "bases loaded",
        }
    }
}

/// A single game state snapshot as seen by one team.
///
/// Pure value object: callers build a fresh one per evaluation and the
/// engine never mutates it. `score_diff` is always home minus away;
/// `is_home` selects whose win probability is being asked for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GameSituation {
    pub inning: u8,
    pub is_top_half: bool,
    /// Conceptually 0..=2; clamped before any table lookup.
    pub outs: u8,
    pub base_state: BaseState,
    /// Home score minus away score.
    pub score_diff: i32,
    pub is_home: bool,
}

/// Coarse game phase derived from the inning number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InningPhase {
    Early,
    Middle,
    Late,
    Final,
}

impl InningPhase {
    pub fn from_inning(inning: u8) -> Self {
        match inning {
            0..=3 => InningPhase::Early,
            4..=6 => InningPhase::Middle,
            7..=8 => InningPhase::Late,
            _ => InningPhase::Final,
        }
    }

    /// Stable row index into the leverage table.
    pub fn index(self) -> usize {
        match self {
            InningPhase::Early => 0,
            InningPhase::Middle => 1,
            InningPhase::Late => 2,
            InningPhase::Final => 3,
        }
    }
}

/// Score-margin bucket derived from the absolute score differential.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LeverageBucket {
    Blowout,
    Comfortable,
    Close,
    Tied,
}

impl LeverageBucket {
    pub fn from_score_diff(score_diff: i32) -> Self {
        match score_diff.abs() {
            0 => LeverageBucket::Tied,
            1..=3 => LeverageBucket::Close,
            4..=6 => LeverageBucket::Comfortable,
            _ => LeverageBucket::Blowout,
        }
    }

    /// Stable column index into the leverage table.
    pub fn index(self) -> usize {
        match self {
            LeverageBucket::Blowout => 0,
            LeverageBucket::Comfortable => 1,
            LeverageBucket::Close => 2,
            LeverageBucket::Tied => 3,
        }
    }
}
