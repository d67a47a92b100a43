//! JSON bodies returned by the activities API.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body of a successful `POST /activities/{activity_name}/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SignupResponse {
    /// Confirmation, e.g. `Signed up ada@mergington.edu for Chess Club`.
    pub message: String,
}

impl SignupResponse {
    /// Build the confirmation for `email` joining `activity`.
    pub fn confirmed(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Signed up {email} for {activity}"),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ErrorDetail {
    /// Human-readable reason.
    pub detail: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HealthResponse {
    /// Always `"ok"` while the server is answering.
    pub status: String,
    /// Number of activities on the board.
    pub activities: u32,
}
