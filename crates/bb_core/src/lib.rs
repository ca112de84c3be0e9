//! # bb_core - Baseball Win-Expectancy and Leverage Engine
//!
//! Deterministic situational evaluator behind the franchise dashboard's
//! win-probability chart and situation panel. It combines a historical
//! base-out run-expectancy matrix, an inning/score leverage table, and
//! a logistic win-probability model into one evaluation, plus a fold
//! that turns a game's scoring events into a chartable timeline.
//!
//! ## Properties
//! - Pure and deterministic: same situation, bit-identical result
//! - Total: out-of-range inputs are clamped, never rejected
//! - Freely concurrent: constant tables only, no shared mutable state

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

// Re-export the in-process API surface.
pub use api::{aggregate_timeline_json, evaluate_situation_json};
pub use engine::{
    aggregate_many, aggregate_timeline, evaluate, leverage_index, run_expectancy,
    win_probability, ExcitementClassifier, SituationEvaluator, TimelineAggregator,
};
pub use error::ApiError;
pub use models::{
    BaseState, Excitement, GameSituation, GameTimeline, InningPhase, LeverageBucket,
    ScoringEvent, TimelinePoint, WinExpectancyResult,
};
