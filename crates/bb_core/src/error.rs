use thiserror::Error;

/// Errors surfaced at the JSON API boundary. The engine itself has no
/// fallible operation (out-of-range numerics are clamped, not
/// rejected), so everything here is about malformed requests.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },
}
