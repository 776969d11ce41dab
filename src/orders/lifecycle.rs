//! Order lifecycle engine
//!
//! Owns every order state change and the tracking-link rules that ride along
//! with it:
//!
//! - creation: status `pending`, link `/track/<id>` issued, link active
//! - `shipped`: link re-issued from the order id, link active
//! - `delivered` / `cancelled`: link flagged expired (kept in the record),
//!   status becomes terminal
//! - other statuses: status only, link untouched
//!
//! "Expiry" is a flag set by these transitions, never a TTL.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{Order, OrderCreate, OrderSnapshot, OrderStatus, OrderStatusPatch};
use crate::db::repository::{self, OrderRepository};
use crate::utils::validation::{MAX_NAME_LEN, validate_quantity, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Tracking link for an order key (public route, served unauthenticated)
fn tracking_link_for(key: &str) -> String {
    format!("/track/{key}")
}

/// Order lifecycle engine over the `orders` partition
#[derive(Clone)]
pub struct OrderLifecycle {
    repo: OrderRepository,
}

impl OrderLifecycle {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: OrderRepository::new(db),
        }
    }

    /// List all orders, newest first
    pub async fn list_orders(&self) -> AppResult<Vec<Order>> {
        Ok(self.repo.find_all().await?)
    }

    /// Fetch a single order
    pub async fn get_order(&self, order_id: &str) -> AppResult<Order> {
        self.repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {order_id}")))
    }

    /// Create a new order
    ///
    /// Validates the payload, assigns status `pending` and issues an active
    /// tracking link derived from the new identifier. Everything lands in a
    /// single write; a validation failure leaves the store untouched.
    pub async fn create_order(&self, data: OrderCreate) -> AppResult<Order> {
        validate_required_text(&data.customer, "customer", MAX_NAME_LEN)?;
        validate_required_text(&data.product, "product", MAX_NAME_LEN)?;
        validate_quantity(data.quantity)?;

        let key = repository::fresh_key();
        let order = Order {
            id: None,
            order_type: data.order_type,
            customer: data.customer,
            product: data.product,
            quantity: data.quantity,
            status: OrderStatus::Pending,
            tracking_link: Some(tracking_link_for(&key)),
            tracking_link_expired: false,
            created_at: 0, // stamped by the gateway
            updated_at: None,
        };

        let created = self.repo.create_with_key(&key, order).await?;
        tracing::info!(
            order = %key,
            customer = %created.customer,
            "Order created"
        );
        Ok(created)
    }

    /// Transition an order to a new status
    ///
    /// Terminal statuses (`delivered`, `cancelled`) only admit an idempotent
    /// re-application of themselves; anything else out of a terminal state is
    /// rejected. Every applied transition stamps `updatedAt`.
    pub async fn change_status(&self, order_id: &str, new_status: OrderStatus) -> AppResult<Order> {
        let current = self.get_order(order_id).await?;

        if current.status.is_terminal() && new_status != current.status {
            return Err(AppError::business_rule(format!(
                "Order is already {}; status can no longer change",
                current.status
            )));
        }

        let key = current
            .id
            .as_ref()
            .map(|id| id.key().to_string())
            .unwrap_or_else(|| order_id.to_string());

        let patch = match new_status {
            OrderStatus::Shipped => OrderStatusPatch {
                status: new_status,
                tracking_link: Some(tracking_link_for(&key)),
                tracking_link_expired: Some(false),
            },
            OrderStatus::Delivered | OrderStatus::Cancelled => OrderStatusPatch {
                status: new_status,
                tracking_link: None,
                tracking_link_expired: Some(true),
            },
            _ => OrderStatusPatch {
                status: new_status,
                tracking_link: None,
                tracking_link_expired: None,
            },
        };

        let updated = self.repo.apply_status_patch(order_id, patch).await?;
        tracing::info!(
            order = %key,
            from = %current.status,
            to = %new_status,
            "Order status changed"
        );
        Ok(updated)
    }

    /// Permanently delete an order (unrelated to status, no cascade)
    pub async fn delete_order(&self, order_id: &str) -> AppResult<()> {
        self.repo.delete(order_id).await?;
        tracing::info!(order = %order_id, "Order deleted");
        Ok(())
    }

    /// Resolve a tracking identifier to a public snapshot
    ///
    /// Read path for the unauthenticated tracking page. Any miss — unknown or
    /// malformed identifier — comes back as `None`, never an error the public
    /// caller has to interpret.
    pub async fn resolve_tracking(&self, order_id: &str) -> AppResult<Option<OrderSnapshot>> {
        let order = self.repo.find_by_id(order_id).await?;
        Ok(order.map(OrderSnapshot::from))
    }
}
