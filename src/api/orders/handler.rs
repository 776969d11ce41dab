//! Order API Handlers
//!
//! Thin HTTP layer over [`OrderLifecycle`]; all lifecycle rules live in the
//! engine, not here.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderStatus};
use crate::orders::OrderLifecycle;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct StatusChangeRequest {
    pub status: OrderStatus,
}

/// GET /api/orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let lifecycle = OrderLifecycle::new(state.db());
    let orders = lifecycle.list_orders().await?;
    Ok(Json(orders))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let lifecycle = OrderLifecycle::new(state.db());
    let order = lifecycle.get_order(&id).await?;
    Ok(Json(order))
}

/// POST /api/orders - 创建订单 (status=pending, 追踪链接随单签发)
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let lifecycle = OrderLifecycle::new(state.db());
    let order = lifecycle.create_order(data).await?;
    Ok(Json(order))
}

/// PUT /api/orders/:id/status - 订单状态流转
pub async fn change_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(req): Json<StatusChangeRequest>,
) -> AppResult<Json<Order>> {
    let lifecycle = OrderLifecycle::new(state.db());
    let order = lifecycle.change_status(&id, req.status).await?;
    Ok(Json(order))
}

/// DELETE /api/orders/:id - 删除订单 (不可恢复)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let lifecycle = OrderLifecycle::new(state.db());
    lifecycle.delete_order(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
