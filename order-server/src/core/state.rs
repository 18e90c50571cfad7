use super::Config;
use crate::db::repository::BaseRepository;
use crate::db::store::DocumentStore;
use crate::db::surreal;
use crate::services::{
    DiningTableService, FoodService, InvoiceService, MenuService, OrderItemService, OrderService,
    UserService,
};
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// Server state: configuration plus every use-case service
///
/// Cloning is cheap; all services share one store handle.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub menus: MenuService,
    pub foods: FoodService,
    pub tables: DiningTableService,
    pub orders: OrderService,
    pub order_items: OrderItemService,
    pub invoices: InvoiceService,
    pub users: UserService,
}

impl ServerState {
    /// Open the RocksDB-backed store under `work_dir/database` and wire the services
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir).map_err(|e| {
            AppError::internal(format!("Failed to create {}: {}", db_dir.display(), e))
        })?;

        let store = surreal::open_rocksdb(&db_dir, &config.db_namespace, &config.db_name).await?;
        tracing::info!(
            environment = %config.environment,
            path = %db_dir.display(),
            namespace = %config.db_namespace,
            database = %config.db_name,
            "Database opened"
        );
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Wire the services over any store
    pub fn with_store(config: &Config, store: Arc<dyn DocumentStore>) -> Self {
        let base = BaseRepository::new(store, config.storage_timeout());
        let orders = OrderService::new(base.clone());
        Self {
            config: config.clone(),
            menus: MenuService::new(base.clone()),
            foods: FoodService::new(base.clone(), config.max_food_price),
            tables: DiningTableService::new(base.clone()),
            order_items: OrderItemService::new(base.clone(), orders.clone(), config.max_food_price),
            orders,
            invoices: InvoiceService::new(base.clone()),
            users: UserService::new(base),
        }
    }
}
