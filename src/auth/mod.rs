//! 认证授权模块
//!
//! 提供 JWT 认证和会话上下文：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文 (显式传入 handler，不使用全局状态)
//! - [`require_auth`] - 认证中间件

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
