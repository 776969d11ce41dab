//! Resharpening Repository

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{ResharpeningProduct, ResharpeningProductCreate, ResharpeningProductUpdate};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "resharpening";

#[derive(Clone)]
pub struct ResharpeningRepository {
    base: BaseRepository,
}

impl ResharpeningRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all resharpening services, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<ResharpeningProduct>> {
        let items: Vec<ResharpeningProduct> = self
            .base
            .db()
            .query("SELECT * FROM resharpening ORDER BY createdAt DESC")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find resharpening service by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ResharpeningProduct>> {
        let key = strip_table_prefix(TABLE, id);
        let item: Option<ResharpeningProduct> = self.base.db().select((TABLE, key)).await?;
        Ok(item)
    }

    /// Create a new resharpening service
    pub async fn create(&self, data: ResharpeningProductCreate) -> RepoResult<ResharpeningProduct> {
        let item = ResharpeningProduct {
            id: None,
            name: data.name,
            rate: data.rate,
            created_at: now_millis(),
            updated_at: None,
        };

        let created: Option<ResharpeningProduct> =
            self.base.db().create(TABLE).content(item).await?;
        created
            .ok_or_else(|| RepoError::Database("Failed to create resharpening service".to_string()))
    }

    /// Update a resharpening service
    pub async fn update(
        &self,
        id: &str,
        data: ResharpeningProductUpdate,
    ) -> RepoResult<ResharpeningProduct> {
        let key = strip_table_prefix(TABLE, id).to_string();

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.rate.is_some() {
            set_parts.push("rate = $rate");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(&key)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Resharpening {} not found", id)));
        }
        set_parts.push("updatedAt = $updated_at");

        let query_str = format!(
            "UPDATE type::thing($table, $key) SET {} RETURN AFTER",
            set_parts.join(", ")
        );

        let mut query = self
            .base
            .db()
            .query(&query_str)
            .bind(("table", TABLE))
            .bind(("key", key))
            .bind(("updated_at", now_millis()));

        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.rate {
            query = query.bind(("rate", v));
        }

        let updated: Vec<ResharpeningProduct> = query.await?.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Resharpening {} not found", id)))
    }

    /// Delete a resharpening service permanently
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = strip_table_prefix(TABLE, id);
        let deleted: Option<ResharpeningProduct> = self.base.db().delete((TABLE, key)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Resharpening {} not found", id)));
        }
        Ok(())
    }
}
