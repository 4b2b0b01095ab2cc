use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult},
    models::NewItem,
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn get_all_items(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let items = db::fetch_all_items(&state.db).await?;

    info!(count = items.len(), "Listed catalogue items");

    Ok((StatusCode::OK, Json(serde_json::json!({ "items": items }))))
}

pub async fn get_by_seller_id(
    State(state): State<AppState>,
    seller: Result<Path<i64>, PathRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path(seller_id) = seller.map_err(|e| AppError::Validation(e.body_text()))?;

    // Unknown sellers yield an empty list, not an error.
    let items = db::fetch_items_by_seller(&state.db, seller_id).await?;

    info!(seller_id, count = items.len(), "Listed items for seller");

    Ok((StatusCode::OK, Json(serde_json::json!({ "items": items }))))
}

pub async fn get_item_information(
    State(state): State<AppState>,
    params: Result<Path<(i64, i64)>, PathRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path((seller_id, item_id)) = params.map_err(|e| AppError::Validation(e.body_text()))?;

    let items = db::fetch_item(&state.db, seller_id, item_id).await?;

    info!(seller_id, item_id, "Fetched item information");

    Ok((StatusCode::OK, Json(serde_json::json!({ "items": items }))))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn add_items(
    State(state): State<AppState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Json(payload) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let item_id = db::insert_item(&state.db, &payload)
        .await
        .map_err(|e| e.on_write("Failed to add item"))?;

    info!(
        seller_id = payload.seller_id,
        item_id,
        name = %payload.item_name,
        "Added item"
    );

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "status": "Item added successfully" })),
    ))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_item_qty(
    State(state): State<AppState>,
    params: Result<Path<(i64, i64, i32)>, PathRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path((seller_id, item_id, new_qty)) =
        params.map_err(|e| AppError::Validation(e.body_text()))?;

    db::update_item_qty(&state.db, seller_id, item_id, new_qty)
        .await
        .map_err(|e| e.on_write("Failed to update item quantity"))?;

    info!(seller_id, item_id, new_qty, "Updated item quantity");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "status": "Item quantity updated successfully" })),
    ))
}
