//! Order Repository
//!
//! Storage-side of the order lifecycle: key allocation happens before the
//! write so the lifecycle engine can derive the tracking link from the new
//! identifier and persist everything in a single create.

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{Order, OrderStatusPatch};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders ORDER BY createdAt DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let key = strip_table_prefix(TABLE, id);
        let order: Option<Order> = self.base.db().select((TABLE, key)).await?;
        Ok(order)
    }

    /// Persist a new order under a pre-allocated key (see [`super::fresh_key`])
    pub async fn create_with_key(&self, key: &str, mut order: Order) -> RepoResult<Order> {
        order.id = None;
        order.created_at = now_millis();
        order.updated_at = None;

        let created: Option<Order> = self
            .base
            .db()
            .create((TABLE, key))
            .content(order)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Apply a status patch; untouched fields keep their stored value
    pub async fn apply_status_patch(&self, id: &str, patch: OrderStatusPatch) -> RepoResult<Order> {
        let key = strip_table_prefix(TABLE, id).to_string();

        let mut set_parts = vec!["status = $status"];
        if patch.tracking_link.is_some() {
            set_parts.push("trackingLink = $tracking_link");
        }
        if patch.tracking_link_expired.is_some() {
            set_parts.push("trackingLinkExpired = $expired");
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
            .bind(("status", patch.status))
            .bind(("updated_at", now_millis()));

        if let Some(v) = patch.tracking_link {
            query = query.bind(("tracking_link", v));
        }
        if let Some(v) = patch.tracking_link_expired {
            query = query.bind(("expired", v));
        }

        let updated: Vec<Order> = query.await?.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Delete an order permanently (no cascade, unrelated to status)
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = strip_table_prefix(TABLE, id);
        let deleted: Option<Order> = self.base.db().delete((TABLE, key)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Order {} not found", id)));
        }
        Ok(())
    }
}
