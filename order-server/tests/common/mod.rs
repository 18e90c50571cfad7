//! Shared fixtures for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use order_server::db::repository::{RepoError, RepoResult};
use order_server::db::store::{Collection, Document, DocumentStore, FieldSet, Filter, UpdateAck};
use order_server::db::surreal;
use order_server::{Config, ServerState};
use rust_decimal::Decimal;
use shared::models::*;
use std::sync::Arc;
use std::time::Duration;

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn test_config(storage_timeout_ms: u64) -> Config {
    Config::with_overrides(std::env::temp_dir().to_string_lossy(), storage_timeout_ms)
}

/// Fresh in-memory SurrealDB per call
pub async fn memory_store() -> surreal::SurrealStore {
    surreal::open_memory("test", "test").await.unwrap()
}

pub async fn memory_state() -> ServerState {
    memory_state_with_store().await.0
}

/// State plus direct access to its store, for raw document checks
pub async fn memory_state_with_store() -> (ServerState, Arc<surreal::SurrealStore>) {
    let store = Arc::new(memory_store().await);
    let state = ServerState::with_store(&test_config(10_000), store.clone());
    (state, store)
}

pub async fn seed_menu(state: &ServerState) -> Menu {
    state
        .menus
        .create(MenuCreate {
            name: "Dinner".into(),
            category: "Main".into(),
            start_date: None,
            end_date: None,
        })
        .await
        .unwrap()
}

pub async fn seed_food(state: &ServerState, menu: &Menu, name: &str, price: &str) -> Food {
    state
        .foods
        .create(FoodCreate {
            name: name.into(),
            price: dec(price),
            food_image: "http://img/food.png".into(),
            menu_id: menu.menu_id.clone(),
        })
        .await
        .unwrap()
}

pub async fn seed_table(state: &ServerState, table_number: i32) -> DiningTable {
    state
        .tables
        .create(DiningTableCreate {
            number_of_guests: 4,
            table_number,
        })
        .await
        .unwrap()
}

pub fn line(food: &Food, quantity: i32) -> OrderItemDraft {
    OrderItemDraft {
        food_id: food.food_id.clone(),
        quantity,
        unit_price: food.price,
    }
}

/// How a [`FaultyStore`] misbehaves
#[derive(Clone, Copy)]
pub enum Fault {
    /// Every call fails with a database error
    Fail,
    /// Every call sleeps far past any test deadline
    Hang,
}

/// Store double that never succeeds
pub struct FaultyStore(pub Fault);

impl FaultyStore {
    async fn misbehave<T>(&self) -> RepoResult<T> {
        match self.0 {
            Fault::Fail => Err(RepoError::Database("connection reset".into())),
            Fault::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(RepoError::Database("unreachable".into()))
            }
        }
    }
}

#[async_trait]
impl DocumentStore for FaultyStore {
    async fn find(&self, _: Collection, _: &Filter) -> RepoResult<Vec<Document>> {
        self.misbehave().await
    }

    async fn insert(&self, _: Collection, _: Document) -> RepoResult<()> {
        self.misbehave().await
    }

    async fn update_sparse(
        &self,
        _: Collection,
        _: &Filter,
        _: &FieldSet,
        _: bool,
    ) -> RepoResult<UpdateAck> {
        self.misbehave().await
    }
}

pub fn faulty_state(fault: Fault, storage_timeout_ms: u64) -> ServerState {
    ServerState::with_store(&test_config(storage_timeout_ms), Arc::new(FaultyStore(fault)))
}
