//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`ApiResponse`] - 错误类型和响应结构
//! - [`logger`] - 日志初始化
//! - [`validation`] - 输入校验
//! - [`time`] - 时间戳工具

pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{ApiResponse, AppError};
pub use result::AppResult;
