//! Demo game fixture
//!
//! A fixed, hand-authored scoring sequence for the demo CLI and chart
//! smoke tests. This is test-fixture data, not part of the evaluation
//! algorithm; real callers feed events from their own game engine.

use crate::models::{BaseState, ScoringEvent};

/// A plausible one-run game: visitors jump ahead, the home side claws
/// back and walks it off in the 9th. Fully deterministic.
pub fn demo_game() -> Vec<ScoringEvent> {
    vec![
        event(1, true, 2, BaseState::Second, "RBI double", 0, 1),
        event(3, true, 1, BaseState::First, "Two-run homer", 0, 2),
        event(4, false, 0, BaseState::Empty, "Solo homer", 1, 0),
        event(6, false, 1, BaseState::FirstThird, "Sac fly", 1, 0),
        event(8, true, 2, BaseState::Third, "RBI single", 0, 1),
        event(8, false, 1, BaseState::FirstSecond, "Game-tying double", 2, 0),
        event(9, false, 2, BaseState::Loaded, "Walk-off single", 1, 0),
    ]
}

/// A batch of independent demo games for the parallel-aggregation path,
/// derived from `demo_game` by index arithmetic so every game differs
/// but stays deterministic.
pub fn demo_games(count: usize) -> Vec<Vec<ScoringEvent>> {
    (0..count)
        .map(|i| {
            let mut events = demo_game();
            // Rotate which side each scoring event credits.
            for (j, event) in events.iter_mut().enumerate() {
                if (i + j) % 3 == 0 {
                    std::mem::swap(
                        &mut event.home_runs_scored,
                        &mut event.away_runs_scored,
                    );
                }
            }
            events
        })
        .collect()
}

fn event(
    inning: u8,
    is_top_half: bool,
    outs: u8,
    base_state: BaseState,
    label: &str,
    home_runs_scored: u32,
    away_runs_scored: u32,
) -> ScoringEvent {
    ScoringEvent {
        inning,
        is_top_half,
        outs,
        base_state,
        label: label.to_string(),
        home_runs_scored,
        away_runs_scored,
    }
}
