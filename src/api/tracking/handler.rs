//! Tracking API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::OrderSnapshot;
use crate::orders::OrderLifecycle;
use crate::utils::{AppError, AppResult};

/// GET /track/:order_id - 公开的订单追踪快照
///
/// Unauthenticated read path for customers holding a tracking link. A miss
/// (unknown or malformed id) renders the not-found envelope; nothing beyond
/// the order's own public fields is exposed.
pub async fn track(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<OrderSnapshot>> {
    let lifecycle = OrderLifecycle::new(state.db());
    let snapshot = lifecycle
        .resolve_tracking(&order_id)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found".to_string()))?;
    Ok(Json(snapshot))
}
