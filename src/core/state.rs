use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db;
use crate::utils::AppResult;

/// 服务器状态 - 所有请求共享的单例引用
///
/// ServerState 是应用的核心数据结构，作为 axum 的共享 state 注入每个 handler。
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式文档数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 初始化服务器状态 (打开磁盘数据库)
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = db::open(&config.work_dir).await?;
        Ok(Self::with_db(config.clone(), db))
    }

    /// 初始化内存态服务器状态 (测试场景)
    pub async fn initialize_in_memory(config: &Config) -> AppResult<Self> {
        let db = db::open_memory().await?;
        Ok(Self::with_db(config.clone(), db))
    }

    fn with_db(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// 获取数据库连接 (浅拷贝)
    pub fn db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
