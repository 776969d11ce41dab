//! Toolworks Server - 刀具销售与翻磨业务后台
//!
//! # 架构概述
//!
//! 本模块是管理后台的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (产品、翻磨、销售员、订单)
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **订单生命周期** (`orders`): 状态机与追踪链接管理
//! - **定价** (`pricing`): 三倍加价定价计算
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! src/
//! ├── core/          # 配置、状态、错误
//! ├── auth/          # JWT 认证、中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (模型 + 仓储)
//! ├── orders/        # 订单生命周期引擎
//! ├── pricing/       # 定价计算
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod pricing;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use orders::OrderLifecycle;
pub use utils::{ApiResponse, AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv, 工作目录, 日志)
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();

    // Make sure the work directory exists before the database opens in it
    std::fs::create_dir_all(&config.work_dir)?;

    if config.is_production() {
        let log_dir = format!("{}/logs", config.work_dir);
        init_logger_with_file(Some(&config.log_level), Some(&log_dir));
    } else {
        init_logger_with_file(Some(&config.log_level), None);
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
  ______            __                    __
 /_  __/___  ____  / /      ______  _____/ /_______
  / / / __ \/ __ \/ / | /| / / __ \/ ___/ //_/ ___/
 / / / /_/ / /_/ / /| |/ |/ / /_/ / /  / ,< (__  )
/_/  \____/\____/_/ |__/|__/\____/_/  /_/|_/____/
    "#
    );
}
