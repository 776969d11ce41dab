//! 报价链接模块
//!
//! 生成接口需要认证；`/quote/<token>` 解码页是公共路由。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/quotations", post(handler::generate))
        .route("/quote/{token}", get(handler::decode))
}
