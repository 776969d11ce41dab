//! Resharpening Product Model
//!
//! Resharpening services are priced by a flat rate, no markup is applied.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Resharpening product ID type
pub type ResharpeningProductId = RecordId;

/// Resharpening service model matching the `resharpening` partition schema
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResharpeningProduct {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ResharpeningProductId>,
    pub name: String,
    /// Flat service rate, must be positive
    pub rate: f64,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Create resharpening product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResharpeningProductCreate {
    pub name: String,
    pub rate: f64,
}

/// Update resharpening product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResharpeningProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}
