use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::AppState;
use crate::handlers::shared_types::{StatusResponse, error_response};

/// Body returned by GET /getGamePlayCount.
#[derive(Serialize)]
pub struct PlayCountResponse {
    #[serde(rename = "playCount")]
    pub play_count: i64,
}

/// Handler for recording one play of the game (POST /recordPlayerPlayCount).
///
/// Adds one to the single global play counter, creating it on first use.
///
/// - On success, responds with `200 OK` and `{"status":"ok"}`.
/// - On a store failure, responds with `500 Internal Server Error`.
#[tracing::instrument(skip(state))]
pub async fn record_player_play_count(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, (StatusCode, String)> {
    // ---
    match state.play_counts().record_play().await {
        Ok(()) => {
            state.metrics().record_play_recorded();
            Ok(Json(StatusResponse::ok()))
        }
        Err(err) => Err(error_response(
            &state,
            "Error recording player's play count",
            err,
        )),
    }
}

/// Handler for reading the global play counter (GET /getGamePlayCount).
///
/// - If the counter exists, responds with `200 OK` and `{"playCount": N}`.
/// - If nothing has ever been recorded, responds with `404 Not Found`.
/// - On a store failure, responds with `500 Internal Server Error`.
#[tracing::instrument(skip(state))]
pub async fn get_game_play_count(
    State(state): State<AppState>,
) -> Result<Json<PlayCountResponse>, (StatusCode, String)> {
    // ---
    match state.play_counts().play_count().await {
        Ok(play_count) => Ok(Json(PlayCountResponse { play_count })),
        Err(err) => Err(error_response(&state, "Error getting game play count", err)),
    }
}
