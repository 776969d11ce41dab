//! Resharpening API 模块

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/resharpening",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/resharpening/{id}",
            put(handler::update).delete(handler::delete),
        )
}
