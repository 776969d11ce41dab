use super::*;

use crate::db;
use crate::db::models::{OrderCreate, OrderStatus, OrderType};
use crate::utils::AppError;

async fn test_lifecycle() -> OrderLifecycle {
    let db = db::open_memory().await.expect("in-memory db");
    OrderLifecycle::new(db)
}

fn acme_order() -> OrderCreate {
    OrderCreate {
        order_type: OrderType::New,
        customer: "Acme".to_string(),
        product: "Blade A".to_string(),
        quantity: 2,
    }
}

#[tokio::test]
async fn test_create_order_starts_pending_with_active_link() {
    let lifecycle = test_lifecycle().await;

    let order = lifecycle.create_order(acme_order()).await.unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert!(!order.tracking_link_expired);
    assert!(order.created_at > 0);
    assert!(order.updated_at.is_none());

    let key = order.id.as_ref().unwrap().key().to_string();
    assert_eq!(order.tracking_link, Some(format!("/track/{key}")));
}

#[tokio::test]
async fn test_create_order_rejects_bad_input() {
    let lifecycle = test_lifecycle().await;

    let mut no_customer = acme_order();
    no_customer.customer = "   ".to_string();
    assert!(matches!(
        lifecycle.create_order(no_customer).await,
        Err(AppError::Validation(_))
    ));

    let mut zero_quantity = acme_order();
    zero_quantity.quantity = 0;
    assert!(matches!(
        lifecycle.create_order(zero_quantity).await,
        Err(AppError::Validation(_))
    ));

    // Nothing was written
    assert!(lifecycle.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_shipped_reissues_active_link() {
    let lifecycle = test_lifecycle().await;
    let order = lifecycle.create_order(acme_order()).await.unwrap();
    let key = order.id.as_ref().unwrap().key().to_string();

    let shipped = lifecycle
        .change_status(&key, OrderStatus::Shipped)
        .await
        .unwrap();

    assert_eq!(shipped.status, OrderStatus::Shipped);
    assert_eq!(shipped.tracking_link, Some(format!("/track/{key}")));
    assert!(!shipped.tracking_link_expired);
    assert!(shipped.updated_at.is_some());
}

#[tokio::test]
async fn test_delivered_expires_link_but_keeps_it() {
    let lifecycle = test_lifecycle().await;
    let order = lifecycle.create_order(acme_order()).await.unwrap();
    let key = order.id.as_ref().unwrap().key().to_string();

    lifecycle
        .change_status(&key, OrderStatus::Shipped)
        .await
        .unwrap();
    let delivered = lifecycle
        .change_status(&key, OrderStatus::Delivered)
        .await
        .unwrap();

    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert!(delivered.tracking_link_expired);
    // Link stays present, only flagged expired
    assert!(delivered.tracking_link.is_some());
}

#[tokio::test]
async fn test_cancelled_expires_link() {
    let lifecycle = test_lifecycle().await;
    let order = lifecycle.create_order(acme_order()).await.unwrap();
    let key = order.id.as_ref().unwrap().key().to_string();

    let cancelled = lifecycle
        .change_status(&key, OrderStatus::Cancelled)
        .await
        .unwrap();

    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert!(cancelled.tracking_link_expired);
}

#[tokio::test]
async fn test_intermediate_status_leaves_link_alone() {
    let lifecycle = test_lifecycle().await;
    let order = lifecycle.create_order(acme_order()).await.unwrap();
    let key = order.id.as_ref().unwrap().key().to_string();
    let original_link = order.tracking_link.clone();

    let processing = lifecycle
        .change_status(&key, OrderStatus::Processing)
        .await
        .unwrap();

    assert_eq!(processing.status, OrderStatus::Processing);
    assert_eq!(processing.tracking_link, original_link);
    assert!(!processing.tracking_link_expired);
}

#[tokio::test]
async fn test_terminal_status_is_idempotent() {
    let lifecycle = test_lifecycle().await;
    let order = lifecycle.create_order(acme_order()).await.unwrap();
    let key = order.id.as_ref().unwrap().key().to_string();

    let first = lifecycle
        .change_status(&key, OrderStatus::Delivered)
        .await
        .unwrap();
    let second = lifecycle
        .change_status(&key, OrderStatus::Delivered)
        .await
        .unwrap();

    assert_eq!(first.status, OrderStatus::Delivered);
    assert_eq!(second.status, OrderStatus::Delivered);
    assert!(first.tracking_link_expired);
    assert!(second.tracking_link_expired);
}

#[tokio::test]
async fn test_terminal_status_blocks_other_transitions() {
    let lifecycle = test_lifecycle().await;
    let order = lifecycle.create_order(acme_order()).await.unwrap();
    let key = order.id.as_ref().unwrap().key().to_string();

    lifecycle
        .change_status(&key, OrderStatus::Cancelled)
        .await
        .unwrap();

    let result = lifecycle.change_status(&key, OrderStatus::Processing).await;
    assert!(matches!(result, Err(AppError::BusinessRule(_))));

    // Still cancelled
    let current = lifecycle.get_order(&key).await.unwrap();
    assert_eq!(current.status, OrderStatus::Cancelled);
}

#[tokio::test]
async fn test_change_status_unknown_order() {
    let lifecycle = test_lifecycle().await;

    let result = lifecycle
        .change_status("does-not-exist", OrderStatus::Shipped)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_tracking_round_trip() {
    let lifecycle = test_lifecycle().await;
    let order = lifecycle.create_order(acme_order()).await.unwrap();
    let key = order.id.as_ref().unwrap().key().to_string();

    let snapshot = lifecycle
        .resolve_tracking(&key)
        .await
        .unwrap()
        .expect("snapshot");

    assert_eq!(snapshot.order_id, key);
    assert_eq!(snapshot.customer, "Acme");
    assert_eq!(snapshot.product, "Blade A");
    assert_eq!(snapshot.quantity, 2);
    assert_eq!(snapshot.order_type, OrderType::New);
    assert_eq!(snapshot.status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_tracking_miss_is_none_not_error() {
    let lifecycle = test_lifecycle().await;

    assert!(lifecycle.resolve_tracking("nope").await.unwrap().is_none());
    // Prefixed and odd inputs degrade the same way
    assert!(
        lifecycle
            .resolve_tracking("orders:nope")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_delete_then_tracking_miss() {
    let lifecycle = test_lifecycle().await;
    let order = lifecycle.create_order(acme_order()).await.unwrap();
    let key = order.id.as_ref().unwrap().key().to_string();

    lifecycle.delete_order(&key).await.unwrap();

    assert!(lifecycle.resolve_tracking(&key).await.unwrap().is_none());
    assert!(matches!(
        lifecycle.delete_order(&key).await,
        Err(AppError::NotFound(_))
    ));
}
