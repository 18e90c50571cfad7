//! Order use cases

use crate::db::repository::{BaseRepository, DiningTableRepository, OrderRepository};
use crate::db::store::{Collection, UpdateAck};
use crate::update::PartialUpdate;
use shared::error::{AppError, AppResult};
use shared::models::{Order, OrderCreate, OrderUpdate};
use shared::util;
use validator::Validate;

#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
    tables: DiningTableRepository,
}

impl OrderService {
    pub fn new(base: BaseRepository) -> Self {
        Self {
            orders: OrderRepository::new(base.clone()),
            tables: DiningTableRepository::new(base),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Order>> {
        Ok(self.orders.find_all().await?)
    }

    pub async fn get(&self, order_id: &str) -> AppResult<Order> {
        Ok(self.orders.get(order_id).await?)
    }

    /// Create an order, seated at an existing table when one is given
    pub async fn create(&self, payload: OrderCreate) -> AppResult<Order> {
        payload.validate()?;
        if let Some(table_id) = &payload.table_id
            && !self.tables.exists(table_id).await?
        {
            return Err(AppError::reference_not_found("table_id", table_id.clone()));
        }

        let now = util::now();
        let order = Order {
            order_id: util::new_id(),
            order_date: payload.order_date.unwrap_or(now),
            table_id: payload.table_id,
            created_at: now,
            updated_at: now,
        };
        self.orders.create(&order).await?;
        tracing::info!(order_id = %order.order_id, table_id = ?order.table_id, "Order created");
        Ok(order)
    }

    pub async fn update(&self, order_id: &str, patch: OrderUpdate) -> AppResult<UpdateAck> {
        PartialUpdate::new()
            .field("order_date", patch.order_date)
            .reference("table_id", patch.table_id, Collection::Table)
            .apply(self.orders.base(), Collection::Order, order_id)
            .await
    }
}
