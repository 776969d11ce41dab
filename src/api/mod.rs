//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查 (公共)
//! - [`tracking`] - 订单追踪页 (公共)
//! - [`quotations`] - 报价链接 (生成需认证，解码公共)
//! - [`auth`] - 认证相关接口
//! - [`products`] - 商品管理接口
//! - [`resharpening`] - 磨刀服务管理接口
//! - [`salespersons`] - 销售员管理接口
//! - [`orders`] - 订单管理接口
//! - [`dashboard`] - 仪表盘统计接口

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod orders;
pub mod products;
pub mod quotations;
pub mod resharpening;
pub mod salespersons;
pub mod tracking;

use std::time::Duration;

use axum::{Router, middleware};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Assemble the full application router
///
/// `require_auth` gates everything under `/api/` except the login route;
/// tracking, quotation decode and health stay reachable without a session.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(tracking::router())
        .merge(auth::router())
        .merge(products::router())
        .merge(resharpening::router())
        .merge(salespersons::router())
        .merge(orders::router())
        .merge(dashboard::router())
        .merge(quotations::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        // 并发限制 (防止 DoS)
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(state)
}
