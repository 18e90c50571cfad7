//! Paged listings of food and users

mod common;

use common::*;
use order_server::db::{Collection, DocumentStore};
use order_server::pagination::PageQuery;
use serde_json::json;

async fn twelve_foods(state: &order_server::ServerState) -> Vec<String> {
    let menu = seed_menu(state).await;
    let mut ids = Vec::new();
    for i in 0..12 {
        let food = seed_food(state, &menu, &format!("Dish {:02}", i), "5.00").await;
        ids.push(food.food_id);
    }
    ids
}

fn ids_of(page: &order_server::pagination::Page<shared::models::Food>) -> Vec<String> {
    page.items.iter().map(|f| f.food_id.clone()).collect()
}

#[tokio::test]
async fn test_second_page_of_five() {
    let state = memory_state().await;
    let ids = twelve_foods(&state).await;

    let page = state
        .foods
        .list(&PageQuery::new(Some("2"), Some("5"), None))
        .await
        .unwrap();
    assert_eq!(page.total_count, 12);
    assert_eq!(ids_of(&page), ids[5..10].to_vec());
}

#[tokio::test]
async fn test_defaults_give_first_ten() {
    let state = memory_state().await;
    let ids = twelve_foods(&state).await;

    let page = state.foods.list(&PageQuery::default()).await.unwrap();
    assert_eq!(page.total_count, 12);
    assert_eq!(ids_of(&page), ids[0..10].to_vec());
}

#[tokio::test]
async fn test_start_index_overrides_page() {
    let state = memory_state().await;
    let ids = twelve_foods(&state).await;

    let page = state
        .foods
        .list(&PageQuery::new(Some("2"), Some("4"), Some("3")))
        .await
        .unwrap();
    assert_eq!(ids_of(&page), ids[3..7].to_vec());
}

#[tokio::test]
async fn test_window_past_the_end_is_empty_but_counted() {
    let state = memory_state().await;
    twelve_foods(&state).await;

    let page = state
        .foods
        .list(&PageQuery::new(Some("5"), Some("5"), None))
        .await
        .unwrap();
    assert_eq!(page.total_count, 12);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_empty_collection() {
    let state = memory_state().await;
    let page = state.foods.list(&PageQuery::default()).await.unwrap();
    assert_eq!(page.total_count, 0);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_users_are_projected() {
    let (state, store) = memory_state_with_store().await;
    for i in 0..3 {
        let doc = json!({
            "user_id": format!("u{}", i),
            "first_name": "Ada",
            "last_name": format!("L{}", i),
            "email": format!("ada{}@example.com", i),
            "phone": "555",
            "password": "$argon2id$secret",
            "token": "t",
            "refresh_token": "r",
            "created_at": "2026-01-01T00:00:00Z",
            "updated_at": "2026-01-01T00:00:00Z"
        });
        store
            .insert(Collection::User, doc.as_object().cloned().unwrap())
            .await
            .unwrap();
    }

    let page = state
        .users
        .list(&PageQuery::new(None, Some("2"), None))
        .await
        .unwrap();
    assert_eq!(page.total_count, 3);
    assert_eq!(page.items.len(), 2);
    let json = serde_json::to_value(&page.items[0]).unwrap();
    assert_eq!(json["user_id"], "u0");
    assert!(json.get("password").is_none());
    assert!(json.get("token").is_none());

    let user = state.users.get("u2").await.unwrap();
    assert_eq!(user.email, "ada2@example.com");
}
