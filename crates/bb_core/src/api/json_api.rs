//! JSON API boundary
//!
//! String-in/string-out entry points for hosts that embed the engine
//! behind an FFI or scripting layer. Requests carry a `schema_version`
//! so the wire shape can evolve without breaking older hosts.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::{aggregate_timeline, evaluate};
use crate::error::ApiError;
use crate::models::{GameSituation, GameTimeline, ScoringEvent, WinExpectancyResult};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub schema_version: u8,
    pub situation: GameSituation,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub success: bool,
    pub result: WinExpectancyResult,
}

#[derive(Debug, Deserialize)]
pub struct TimelineRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub events: Vec<ScoringEvent>,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub success: bool,
    pub timeline: GameTimeline,
}

fn check_schema(found: u8) -> Result<(), ApiError> {
    if found != SCHEMA_VERSION {
        warn!("rejecting request with schema version {found}");
        return Err(ApiError::UnsupportedSchema { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

/// Evaluate a single game situation from a JSON `EvaluateRequest`.
pub fn evaluate_situation_json(request_json: &str) -> Result<String, ApiError> {
    let request: EvaluateRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    debug!(
        inning = request.situation.inning,
        score_diff = request.situation.score_diff,
        "evaluating situation"
    );
    let response = EvaluateResponse { success: true, result: evaluate(&request.situation) };
    serde_json::to_string(&response).map_err(ApiError::Serialization)
}

/// Aggregate a full game's scoring events from a JSON `TimelineRequest`.
pub fn aggregate_timeline_json(request_json: &str) -> Result<String, ApiError> {
    let request: TimelineRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    debug!(events = request.events.len(), "aggregating timeline");
    let response =
        TimelineResponse { success: true, timeline: aggregate_timeline(&request.events) };
    serde_json::to_string(&response).map_err(ApiError::Serialization)
}
