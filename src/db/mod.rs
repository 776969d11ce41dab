//! Database Module
//!
//! Embedded SurrealDB document store. Four partitions (tables) hold all
//! persistent state: `products`, `resharpening`, `salespersons`, `orders`.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

/// Namespace / database used by the server
const NAMESPACE: &str = "toolworks";
const DATABASE: &str = "admin";

/// Open the on-disk store under `<work_dir>/data`
pub async fn open(work_dir: &str) -> Result<Surreal<Db>, AppError> {
    let data_dir = format!("{work_dir}/data");
    std::fs::create_dir_all(&data_dir)
        .map_err(|e| AppError::database(format!("Failed to create data directory: {e}")))?;

    let path = format!("{data_dir}/toolworks.db");
    let db = Surreal::new::<RocksDb>(path.as_str())
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

    tracing::info!(path = %path, "Database connection established (embedded SurrealDB)");
    Ok(db)
}

/// Open an in-memory store (tests and local experiments)
pub async fn open_memory() -> Result<Surreal<Db>, AppError> {
    let db = Surreal::new::<Mem>(())
        .await
        .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;

    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

    Ok(db)
}
