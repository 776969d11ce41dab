//! Order API 模块

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", get(handler::list).post(handler::create))
        .route(
            "/api/orders/{id}",
            get(handler::get_by_id).delete(handler::delete),
        )
        .route("/api/orders/{id}/status", put(handler::change_status))
}
