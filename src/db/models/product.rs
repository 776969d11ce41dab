//! Product Model
//!
//! Catalog products carry both the raw (cost) price and the derived sale price.
//! Invariant: `final_price == raw_price * MARKUP_FACTOR`, recomputed by the
//! gateway on every create and update.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Product ID type
pub type ProductId = RecordId;

/// Product model matching the `products` partition schema
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ProductId>,
    pub name: String,
    /// Raw (cost) price entered by the admin
    pub raw_price: f64,
    /// Derived sale price (raw * markup factor)
    pub final_price: f64,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub raw_price: f64,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_price: Option<f64>,
}
