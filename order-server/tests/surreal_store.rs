//! SurrealDB document store behaviour

mod common;

use common::*;
use order_server::db::surreal;
use order_server::db::{Collection, Document, DocumentStore, FieldSet, Filter};
use serde_json::{Value, json};

fn doc(value: Value) -> Document {
    value.as_object().cloned().unwrap()
}

#[tokio::test]
async fn test_find_filters_and_hides_record_id() {
    let store = memory_store().await;
    for (id, order) in [("b", "o1"), ("a", "o1"), ("c", "o2")] {
        store
            .insert(
                Collection::OrderItem,
                doc(json!({"order_item_id": id, "order_id": order, "quantity": 1})),
            )
            .await
            .unwrap();
    }

    let found = store
        .find(Collection::OrderItem, &Filter::eq("order_id", "o1"))
        .await
        .unwrap();
    let ids: Vec<&Value> = found.iter().map(|d| &d["order_item_id"]).collect();
    assert_eq!(ids, vec![&json!("a"), &json!("b")]);
    assert!(found.iter().all(|d| !d.contains_key("id")));

    let all = store.find(Collection::OrderItem, &Filter::all()).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_find_on_nested_path() {
    let store = memory_store().await;
    store
        .insert(Collection::Order, doc(json!({"order_id": "o1", "meta": {"source": "app"}})))
        .await
        .unwrap();
    let hit = store
        .find_one(Collection::Order, &Filter::eq("meta.source", "app"))
        .await
        .unwrap();
    assert_eq!(hit.unwrap()["order_id"], json!("o1"));
    let miss = store
        .find_one(Collection::Order, &Filter::eq("meta.source", "web"))
        .await
        .unwrap();
    assert!(miss.is_none());
}

#[tokio::test]
async fn test_update_sparse_sets_only_given_fields() {
    let store = memory_store().await;
    store
        .insert(Collection::Food, doc(json!({"food_id": "f1", "name": "Soup", "price": 4.2})))
        .await
        .unwrap();

    let mut fields = FieldSet::new();
    fields.set("name", json!("Stew"));
    let ack = store
        .update_sparse(Collection::Food, &Filter::eq("food_id", "f1"), &fields, false)
        .await
        .unwrap();
    assert_eq!(ack.matched_count, 1);
    assert_eq!(ack.modified_count, 1);

    let after = store
        .find_one(Collection::Food, &Filter::eq("food_id", "f1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after, doc(json!({"food_id": "f1", "name": "Stew", "price": 4.2})));
}

#[tokio::test]
async fn test_update_without_upsert_creates_nothing() {
    let store = memory_store().await;
    let mut fields = FieldSet::new();
    fields.set("name", json!("Ghost"));
    let ack = store
        .update_sparse(Collection::Food, &Filter::eq("food_id", "nope"), &fields, false)
        .await
        .unwrap();
    assert_eq!(ack.matched_count, 0);
    assert!(!ack.upserted);
    assert!(store.find(Collection::Food, &Filter::all()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upsert_builds_document_from_filter_and_fields() {
    let store = memory_store().await;
    let mut fields = FieldSet::new();
    fields.set("name", json!("New"));
    let ack = store
        .update_sparse(Collection::Menu, &Filter::eq("menu_id", "m9"), &fields, true)
        .await
        .unwrap();
    assert!(ack.upserted);

    let created = store.find(Collection::Menu, &Filter::all()).await.unwrap();
    assert_eq!(created, vec![doc(json!({"menu_id": "m9", "name": "New"}))]);
}

#[tokio::test]
async fn test_rejects_unsafe_field_names() {
    let store = memory_store().await;
    let err = store
        .find(Collection::Food, &Filter::eq("name = 1 OR true", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, order_server::db::repository::RepoError::Validation(_)));
}

#[tokio::test]
async fn test_rocksdb_persists_across_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    {
        let store = surreal::open_rocksdb(tmp.path(), "test", "test").await.unwrap();
        store
            .insert(Collection::Table, doc(json!({"table_id": "t1", "table_number": 4})))
            .await
            .unwrap();
    }
    // the embedded engine releases its lock once every handle is dropped
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    let store = surreal::open_rocksdb(tmp.path(), "test", "test").await.unwrap();
    let tables = store.find(Collection::Table, &Filter::all()).await.unwrap();
    assert_eq!(tables, vec![doc(json!({"table_id": "t1", "table_number": 4}))]);
}
