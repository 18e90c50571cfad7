//! Storage faults and deadlines surface as typed errors

mod common;

use common::*;
use order_server::ErrorCode;
use order_server::pagination::PageQuery;
use shared::models::*;

#[tokio::test]
async fn test_storage_fault_from_aggregation() {
    let state = faulty_state(Fault::Fail, 10_000);
    let err = state.order_items.items_by_order("o1").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageFault);
    assert!(err.message.contains("connection reset"));
}

#[tokio::test]
async fn test_storage_fault_from_update_reference_check() {
    let state = faulty_state(Fault::Fail, 10_000);
    let err = state
        .foods
        .update(
            "f1",
            FoodUpdate {
                menu_id: Some("m1".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageFault);
}

#[tokio::test]
async fn test_storage_fault_from_write() {
    let state = faulty_state(Fault::Fail, 10_000);
    let err = state
        .tables
        .update(
            "t1",
            DiningTableUpdate {
                number_of_guests: Some(2),
                table_number: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageFault);
}

#[tokio::test]
async fn test_timeout_from_aggregation() {
    let state = faulty_state(Fault::Hang, 50);
    let err = state.order_items.items_by_order("o1").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::Timeout);
    assert_eq!(err.http_status(), shared::http::StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn test_timeout_from_update() {
    let state = faulty_state(Fault::Hang, 50);
    let err = state
        .invoices
        .update(
            "i1",
            InvoiceUpdate {
                payment_status: Some(PaymentStatus::Paid),
                payment_method: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::Timeout);
}

#[tokio::test]
async fn test_timeout_from_paged_listing() {
    let state = faulty_state(Fault::Hang, 50);
    let err = state.users.list(&PageQuery::default()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::Timeout);
}
