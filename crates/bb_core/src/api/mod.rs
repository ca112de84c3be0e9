pub mod json_api;

pub use json_api::{
    aggregate_timeline_json, evaluate_situation_json, EvaluateRequest, EvaluateResponse,
    TimelineRequest, TimelineResponse, SCHEMA_VERSION,
};
