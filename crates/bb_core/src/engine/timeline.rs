//! Win-probability timeline aggregation
//!
//! Folds an ordered sequence of scoring events into chart points with
//! before/after win probabilities, always from the home team's
//! perspective. Purely linear accumulation over the running score; the
//! events themselves come from an upstream game engine, never from here.

use rayon::prelude::*;

use crate::models::{BaseState, GameSituation, GameTimeline, ScoringEvent, TimelinePoint};

use super::evaluator::SituationEvaluator;

/// Pregame placeholder used when a timeline has no events at all.
const PREGAME: GameSituation = GameSituation {
    inning: 1,
    is_top_half: true,
    outs: 0,
    base_state: BaseState::Empty,
    score_diff: 0,
    is_home: true,
};

pub struct TimelineAggregator;

impl TimelineAggregator {
    /// Fold one game's scoring events into a win-probability chart.
    ///
    /// Each point is evaluated twice from the home perspective: once at
    /// the pre-event score and once after applying the event's runs.
    /// The leverage index recorded is the one the at-bat was played
    /// under (the pre-event score).
    pub fn aggregate(events: &[ScoringEvent]) -> GameTimeline {
        let mut home_score: i32 = 0;
        let mut away_score: i32 = 0;

        let baseline_situation = events
            .first()
            .map(|event| Self::situation(event, 0))
            .unwrap_or(PREGAME);
        let baseline = SituationEvaluator::evaluate(&baseline_situation).win_probability;

        let mut high_point = baseline;
        let mut low_point = baseline;
        let mut biggest_swing: i16 = 0;
        let mut points = Vec::with_capacity(events.len());

        for event in events {
            let before_eval =
                SituationEvaluator::evaluate(&Self::situation(event, home_score - away_score));

            home_score += event.home_runs_scored as i32;
            away_score += event.away_runs_scored as i32;

            let after = SituationEvaluator::evaluate(&Self::situation(
                event,
                home_score - away_score,
            ))
            .win_probability;
            let before = before_eval.win_probability;
            let delta = after as i16 - before as i16;

            if delta.abs() > biggest_swing.abs() {
                biggest_swing = delta;
            }
            high_point = high_point.max(after);
            low_point = low_point.min(after);

            points.push(TimelinePoint {
                inning: event.inning,
                is_top_half: event.is_top_half,
                label: event.label.clone(),
                home_wp_before: before,
                home_wp_after: after,
                away_wp: 100 - after,
                leverage_index: before_eval.leverage_index,
                delta,
            });
        }

        GameTimeline { points, high_point, low_point, biggest_swing }
    }

    /// Aggregate many independent game timelines in parallel. Each game
    /// is still folded sequentially, but games share nothing.
    pub fn aggregate_many(games: &[Vec<ScoringEvent>]) -> Vec<GameTimeline> {
        games.par_iter().map(|events| Self::aggregate(events)).collect()
    }

    fn situation(event: &ScoringEvent, score_diff: i32) -> GameSituation {
        GameSituation {
            inning: event.inning,
            is_top_half: event.is_top_half,
            outs: event.outs,
            base_state: event.base_state,
            score_diff,
            is_home: true,
        }
    }
}

/// Free-function seam used by presentation callers.
pub fn aggregate_timeline(events: &[ScoringEvent]) -> GameTimeline {
    TimelineAggregator::aggregate(events)
}

pub fn aggregate_many(games: &[Vec<ScoringEvent>]) -> Vec<GameTimeline> {
    TimelineAggregator::aggregate_many(games)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(
        inning: u8,
        is_top_half: bool,
        base_state: BaseState,
        label: &str,
        home: u32,
        away: u32,
    ) -> ScoringEvent {
        ScoringEvent {
            inning,
            is_top_half,
            outs: 1,
            base_state,
            label: label.to_string(),
            home_runs_scored: home,
            away_runs_scored: away,
        }
    }

    #[test]
    fn empty_timeline_sits_at_the_pregame_baseline() {
        let timeline = aggregate_timeline(&[]);
        assert!(timeline.points.is_empty());
        assert_eq!(timeline.high_point, timeline.low_point);
        assert_eq!(timeline.biggest_swing, 0);
    }

    #[test]
    fn home_two_run_homer_swings_positive() {
        let events = vec![
            event(3, true, BaseState::Second, "RBI double", 0, 1),
            event(6, false, BaseState::First, "Two-run homer", 2, 0),
        ];
        let timeline = aggregate_timeline(&events);
        assert_eq!(timeline.points.len(), 2);

        let homer = &timeline.points[1];
        assert!(homer.delta > 0, "home runs must raise home WP: {homer:?}");
        assert!(timeline.high_point >= homer.home_wp_after);
        assert_eq!(homer.away_wp, 100 - homer.home_wp_after);
    }

    #[test]
    fn away_scoring_swings_negative_and_sets_the_low_point() {
        let events =
            vec![event(4, true, BaseState::Loaded, "Bases-clearing triple", 0, 3)];
        let timeline = aggregate_timeline(&events);
        let point = &timeline.points[0];
        assert!(point.delta < 0);
        assert_eq!(timeline.low_point, point.home_wp_after);
        assert_eq!(timeline.biggest_swing, point.delta);
    }

    #[test]
    fn running_score_carries_across_events() {
        let events = vec![
            event(1, true, BaseState::Empty, "Solo homer", 0, 1),
            event(2, true, BaseState::Empty, "Solo homer", 0, 1),
            event(5, false, BaseState::FirstSecond, "RBI single", 1, 0),
        ];
        let timeline = aggregate_timeline(&events);
        // Third event is evaluated down 0-2 before the run scores.
        let third = &timeline.points[2];
        assert!(third.home_wp_before < 50);
        assert!(third.delta > 0);
    }

    #[test]
    fn parallel_aggregation_matches_sequential() {
        let game_a = vec![event(2, false, BaseState::First, "RBI double", 1, 0)];
        let game_b = vec![
            event(5, true, BaseState::Third, "Sac fly", 0, 1),
            event(9, false, BaseState::Loaded, "Walk-off single", 1, 0),
        ];
        let games = vec![game_a.clone(), game_b.clone()];
        let parallel = aggregate_many(&games);
        assert_eq!(parallel[0], aggregate_timeline(&game_a));
        assert_eq!(parallel[1], aggregate_timeline(&game_b));
    }
}
