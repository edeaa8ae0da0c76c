use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::AppState;
use crate::domain::ItemQuantity;
use crate::handlers::shared_types::{StatusResponse, error_response};

/// Body accepted by POST /recodItemQuantity.
///
/// Both fields are optional at the wire level so that a missing field
/// reaches the service's validation instead of being rejected by the JSON
/// extractor with a framework-shaped error.
#[derive(Deserialize)]
pub struct RecordItemQuantityRequest {
    #[serde(rename = "itemId")]
    pub item_id: Option<String>,
    pub amount: Option<i64>,
}

/// Query parameters accepted by GET /getItemQuantity.
#[derive(Deserialize)]
pub struct ItemQuantityQuery {
    #[serde(rename = "itemId")]
    pub item_id: Option<String>,
}

/// Handler for adjusting an item's quantity (POST /recodItemQuantity).
///
/// The route name carries a historical typo that existing clients depend on.
///
/// - On success, responds with `200 OK` and `{"status":"ok"}`.
/// - If `itemId` or `amount` is missing, responds with `400 Bad Request`.
/// - On a store failure, responds with `500 Internal Server Error`.
#[tracing::instrument(skip(state, req))]
pub async fn record_item_quantity(
    State(state): State<AppState>,
    Json(req): Json<RecordItemQuantityRequest>,
) -> Result<Json<StatusResponse>, (StatusCode, String)> {
    // ---
    let item_id = req.item_id.as_deref().unwrap_or_default();

    match state
        .item_quantities()
        .record_item_quantity(item_id, req.amount)
        .await
    {
        Ok(()) => {
            state.metrics().record_item_quantity_updated();
            Ok(Json(StatusResponse::ok()))
        }
        Err(err) => Err(error_response(&state, "Error updating item quantity", err)),
    }
}

/// Handler for reading an item's quantity (GET /getItemQuantity?itemId=...).
///
/// - If the item exists, responds with `200 OK` and `{"itemId","quantity"}`.
/// - If `itemId` is missing or empty, responds with `400 Bad Request`.
/// - If the item has never been written, responds with `404 Not Found`.
/// - On a store failure, responds with `500 Internal Server Error`.
#[tracing::instrument(skip(state, query))]
pub async fn get_item_quantity(
    State(state): State<AppState>,
    Query(query): Query<ItemQuantityQuery>,
) -> Result<Json<ItemQuantity>, (StatusCode, String)> {
    // ---
    let item_id = query.item_id.as_deref().unwrap_or_default();

    match state.item_quantities().item_quantity(item_id).await {
        Ok(item) => Ok(Json(item)),
        Err(err) => Err(error_response(&state, "Error getting item quantity", err)),
    }
}
