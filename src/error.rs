//! Error types for the simulator
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Simulator Error Enum ==
/// Unified error type for the simulator and its HTTP adapter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Cache constructed with an unusable configuration (capacity < 1)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Policy name did not match any supported eviction policy
    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),

    /// Scenario name did not match any preset
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for SimError {
    fn into_response(self) -> Response {
        let status = match &self {
            SimError::InvalidConfiguration(_) => StatusCode::BAD_REQUEST,
            SimError::UnknownPolicy(_) => StatusCode::NOT_FOUND,
            SimError::UnknownScenario(_) => StatusCode::NOT_FOUND,
            SimError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the simulator.
pub type Result<T> = std::result::Result<T, SimError>;
