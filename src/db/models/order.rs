//! Order Model
//!
//! 订单状态机：
//!
//! ```text
//! pending -> processing -> shipped -> delivered  [terminal]
//!    \___________________________/-> cancelled   [terminal]
//! ```
//!
//! Non-terminal statuses may be set in any order (matching the admin UI, which
//! exposes a free status dropdown). Terminal statuses only admit an idempotent
//! re-application of themselves.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order ID type
pub type OrderId = RecordId;

/// Order status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Delivered and cancelled orders never leave their status
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Order type: a new-tool sale or a resharpening job
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    New,
    Resharpening,
}

/// Order entity matching the `orders` partition schema
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<OrderId>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub customer: String,
    pub product: String,
    pub quantity: i64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_link: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub tracking_link_expired: bool,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub customer: String,
    pub product: String,
    pub quantity: i64,
}

/// Status-change patch applied by the lifecycle engine
///
/// Fields left `None` are untouched in the store (merge semantics).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusPatch {
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_link_expired: Option<bool>,
}

/// Public read-only projection served on the tracking surface
///
/// Carries exactly what the customer-facing tracking page renders; no
/// administrative fields beyond the order's own data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSnapshot {
    pub order_id: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub customer: String,
    pub product: String,
    pub quantity: i64,
    pub status: OrderStatus,
    pub tracking_link_expired: bool,
    pub created_at: i64,
}

impl From<Order> for OrderSnapshot {
    fn from(order: Order) -> Self {
        Self {
            order_id: order
                .id
                .as_ref()
                .map(|id| id.key().to_string())
                .unwrap_or_default(),
            order_type: order.order_type,
            customer: order.customer,
            product: order.product,
            quantity: order.quantity,
            status: order.status,
            tracking_link_expired: order.tracking_link_expired,
            created_at: order.created_at,
        }
    }
}
