//! Server state over an on-disk database

use order_server::{Config, ServerState};
use shared::models::{DiningTableCreate, OrderCreate};

#[tokio::test]
async fn test_initialize_opens_database_under_work_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy(), 5_000);
    let state = ServerState::initialize(&config).await.unwrap();
    assert!(config.database_dir().exists());

    let table = state
        .tables
        .create(DiningTableCreate {
            number_of_guests: 2,
            table_number: 1,
        })
        .await
        .unwrap();
    let order = state
        .orders
        .create(OrderCreate {
            order_date: None,
            table_id: Some(table.table_id.clone()),
        })
        .await
        .unwrap();

    assert_eq!(state.orders.get(&order.order_id).await.unwrap(), order);
    assert_eq!(state.tables.list().await.unwrap(), vec![table]);
}

#[tokio::test]
async fn test_create_payloads_are_validated() {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy(), 5_000);
    let state = ServerState::initialize(&config).await.unwrap();

    let err = state
        .tables
        .create(DiningTableCreate {
            number_of_guests: 2,
            table_number: 0,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, order_server::ErrorCode::ValidationFailed);
    assert!(err.details.unwrap().contains_key("table_number"));
}
