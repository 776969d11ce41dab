//! 公共订单追踪路由
//!
//! `/track/<orderId>` 是对外分享的追踪链接，无需登录即可访问。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// 追踪路由 - 公共路由 (无需认证)
pub fn router() -> Router<ServerState> {
    Router::new().route("/track/{order_id}", get(handler::track))
}
