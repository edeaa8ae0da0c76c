use axum::http::StatusCode;
use serde::Serialize;

use crate::app_state::AppState;
use crate::domain::StatsError;

/// Body returned by the write endpoints on success: `{"status":"ok"}`.
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    // ---

    pub fn ok() -> Self {
        StatusResponse { status: "ok" }
    }
}

/// Maps a service error onto the wire contract.
///
/// Validation and not-found errors carry caller-facing messages and are
/// returned verbatim. Store and reset failures are logged in full, while the
/// response body stays generic (`"{context}."`) unless the deployment opted
/// into exposing store errors, in which case it becomes `"{context}: {err}"`.
pub(crate) fn error_response(
    state: &AppState,
    context: &str,
    err: StatsError,
) -> (StatusCode, String) {
    // ---
    match err {
        StatsError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
        StatsError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
        StatsError::Store(err) => {
            tracing::error!("{context}: {err:#}");
            let body = if state.expose_store_errors() {
                format!("{context}: {err}")
            } else {
                format!("{context}.")
            };
            (StatusCode::INTERNAL_SERVER_ERROR, body)
        }
        StatsError::Internal(err) => {
            tracing::error!("{context}: {err:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{context}."))
        }
    }
}
