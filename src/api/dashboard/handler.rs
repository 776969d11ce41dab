//! Dashboard API Handlers
//!
//! Aggregate counts are recomputed from full partition scans on every call.
//! Always fresh, no counters to drift; fine at this dataset size, revisit if
//! the partitions ever grow past a few thousand records.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Order, Salesperson};
use crate::db::repository::{OrderRepository, SalespersonRepository};
use crate::utils::AppResult;

/// Dashboard summary counts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_salespersons: usize,
    pub total_orders: usize,
    pub active_tracking_links: usize,
    pub expired_links: usize,
}

impl DashboardStats {
    /// Pure aggregation over the scanned partitions
    pub fn from_records(salespersons: &[Salesperson], orders: &[Order]) -> Self {
        let expired_links = orders.iter().filter(|o| o.tracking_link_expired).count();
        Self {
            total_salespersons: salespersons.len(),
            total_orders: orders.len(),
            active_tracking_links: orders.len() - expired_links,
            expired_links,
        }
    }
}

/// GET /api/dashboard/stats - 仪表盘统计
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    let salespersons = SalespersonRepository::new(state.db()).find_all().await?;
    let orders = OrderRepository::new(state.db()).find_all().await?;

    Ok(Json(DashboardStats::from_records(&salespersons, &orders)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{OrderStatus, OrderType};

    fn order(status: OrderStatus, expired: bool) -> Order {
        Order {
            id: None,
            order_type: OrderType::New,
            customer: "Acme".to_string(),
            product: "Blade A".to_string(),
            quantity: 1,
            status,
            tracking_link: Some("/track/x".to_string()),
            tracking_link_expired: expired,
            created_at: 1,
            updated_at: None,
        }
    }

    fn salesperson(name: &str) -> Salesperson {
        Salesperson {
            id: None,
            name: name.to_string(),
            email: format!("{name}@toolworks.in"),
            hash_pass: "irrelevant".to_string(),
            created_at: 1,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_store_all_zero() {
        let stats = DashboardStats::from_records(&[], &[]);
        assert_eq!(
            stats,
            DashboardStats {
                total_salespersons: 0,
                total_orders: 0,
                active_tracking_links: 0,
                expired_links: 0,
            }
        );
    }

    #[test]
    fn test_delivered_and_shipped_split() {
        let orders = vec![
            order(OrderStatus::Delivered, true),
            order(OrderStatus::Shipped, false),
        ];
        let stats = DashboardStats::from_records(&[salesperson("ravi")], &orders);

        assert_eq!(stats.total_orders, 2);
        assert_eq!(stats.expired_links, 1);
        assert_eq!(stats.active_tracking_links, 1);
        assert_eq!(stats.total_salespersons, 1);
    }
}
