//! REST API endpoint handlers for the activities board.
//!
//! Handlers read and mutate the [`ActivityStore`](mergington_core::ActivityStore)
//! held in the shared [`AppState`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Redirect to the static dashboard |
//! | `GET` | `/health` | Liveness probe with activity count |
//! | `GET` | `/activities` | All activities keyed by name |
//! | `POST` | `/activities/{activity_name}/signup?email=` | Add a student to a roster |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use mergington_types::{ActivityCatalog, HealthResponse, SignupResponse};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Where `GET /` sends the browser.
pub const DASHBOARD_PATH: &str = "/static/index.html";

/// Query parameters for `POST /activities/{activity_name}/signup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupQuery {
    /// Student email. Stored exactly as given.
    pub email: String,
}

impl SignupQuery {
    /// Pick `email` out of the decoded query pairs.
    ///
    /// When the key is repeated the last value wins; other keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidQuery`] when no `email` key is present.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, ApiError> {
        pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, email)| Self { email })
            .ok_or_else(|| {
                ApiError::InvalidQuery(String::from(
                    "Failed to deserialize query string: missing field `email`",
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// GET / -- redirect to the dashboard
// ---------------------------------------------------------------------------

/// Redirect to the static dashboard with `307 Temporary Redirect`.
pub async fn root() -> Redirect {
    Redirect::temporary(DASHBOARD_PATH)
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Report that the server is up and how many activities it holds.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let activities = u32::try_from(state.store.activity_count().await).unwrap_or(u32::MAX);
    Json(HealthResponse {
        status: String::from("ok"),
        activities,
    })
}

// ---------------------------------------------------------------------------
// GET /activities
// ---------------------------------------------------------------------------

/// Return every activity keyed by name, with its current roster.
pub async fn list_activities(State(state): State<Arc<AppState>>) -> Json<ActivityCatalog> {
    Json(state.store.list_all().await)
}

// ---------------------------------------------------------------------------
// POST /activities/{activity_name}/signup
// ---------------------------------------------------------------------------

/// Sign a student up for an activity.
///
/// `activity_name` arrives percent-decoded from the path and must match a
/// store key exactly. Capacity is not enforced; a signup that takes the
/// roster past `max_participants` is accepted and logged at `warn`.
///
/// # Errors
///
/// - 404 `Activity not found` when no activity has that name
/// - 400 `Student is already signed up` when the email is on the roster
/// - 400 when the path segment does not decode to UTF-8
/// - 422 when the `email` query parameter is missing
pub async fn signup(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SignupResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(pairs) = query?;
    let SignupQuery { email } = SignupQuery::from_pairs(pairs)?;

    let enrollment = state
        .store
        .add_participant(&activity_name, &email)
        .await
        .inspect_err(|e| {
            info!(activity = %activity_name, email = %email, reason = %e, "Signup refused");
        })?;

    if enrollment.is_over_capacity() {
        warn!(
            activity = %activity_name,
            participants = enrollment.participants,
            max_participants = enrollment.max_participants,
            "Roster is over capacity"
        );
    }

    info!(activity = %activity_name, email = %email, "Student signed up");

    Ok(Json(SignupResponse::confirmed(&email, &activity_name)))
}
