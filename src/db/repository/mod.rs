//! Repository Module
//!
//! Per-partition CRUD over the embedded document store. Each repository owns
//! the write-side invariants of its partition (derived pricing, unique email,
//! gateway timestamps).

pub mod order;
pub mod product;
pub mod resharpening;
pub mod salesperson;

// Re-exports
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use resharpening::ResharpeningRepository;
pub use salesperson::SalespersonRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: API 层统一使用 "table:id" 字符串，URL 参数允许纯 key
// =============================================================================

/// Strip a leading `table:` prefix so both `orders:abc` and `abc` resolve
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    match id.split_once(':') {
        Some((t, key)) if t == table => key,
        _ => id,
    }
}

/// Allocate a fresh record key (the store-assigned identifier for new records)
pub fn fresh_key() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
