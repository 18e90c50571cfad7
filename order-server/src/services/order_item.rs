//! Order line use cases

use super::OrderService;
use crate::db::repository::{BaseRepository, FoodRepository, OrderItemRepository};
use crate::db::store::{Collection, UpdateAck};
use crate::money;
use crate::update::PartialUpdate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::models::{Order, OrderCreate, OrderItem, OrderItemPack, OrderItemUpdate, OrderSummary};
use shared::util;
use validator::Validate;

/// The order opened by a pack and the lines inserted into it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedPack {
    pub order: Order,
    pub order_items: Vec<OrderItem>,
}

#[derive(Clone)]
pub struct OrderItemService {
    items: OrderItemRepository,
    foods: FoodRepository,
    orders: OrderService,
    max_price: Decimal,
}

impl OrderItemService {
    pub fn new(base: BaseRepository, orders: OrderService, max_price: Decimal) -> Self {
        Self {
            items: OrderItemRepository::new(base.clone()),
            foods: FoodRepository::new(base),
            orders,
            max_price,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<OrderItem>> {
        Ok(self.items.find_all().await?)
    }

    pub async fn get(&self, order_item_id: &str) -> AppResult<OrderItem> {
        Ok(self.items.get(order_item_id).await?)
    }

    /// Summaries of the order's joined lines; empty when it has none
    pub async fn items_by_order(&self, order_id: &str) -> AppResult<Vec<OrderSummary>> {
        Ok(self.items.summaries_by_order(order_id).await?)
    }

    /// Open a fresh order and insert every line of the pack into it
    ///
    /// Every line is validated and its food resolved before the order is
    /// created, so a bad line writes nothing.
    pub async fn create_pack(&self, pack: OrderItemPack) -> AppResult<CreatedPack> {
        pack.validate()?;

        let mut prices = Vec::with_capacity(pack.order_items.len());
        for (idx, draft) in pack.order_items.iter().enumerate() {
            let price = money::validate_price("unit_price", draft.unit_price, self.max_price)
                .map_err(|e| e.with_detail("line", idx))?;
            if !self.foods.exists(&draft.food_id).await? {
                return Err(AppError::reference_not_found("food_id", draft.food_id.clone())
                    .with_detail("line", idx));
            }
            prices.push(price);
        }

        let order = self
            .orders
            .create(OrderCreate {
                order_date: None,
                table_id: pack.table_id,
            })
            .await?;

        let now = util::now();
        let order_items: Vec<OrderItem> = pack
            .order_items
            .into_iter()
            .zip(prices)
            .map(|(draft, unit_price)| OrderItem {
                order_item_id: util::new_id(),
                order_id: order.order_id.clone(),
                food_id: draft.food_id,
                quantity: draft.quantity,
                unit_price,
                created_at: now,
                updated_at: now,
            })
            .collect();
        self.items.create_many(&order_items).await?;
        tracing::info!(order_id = %order.order_id, lines = order_items.len(), "Order lines created");

        Ok(CreatedPack { order, order_items })
    }

    pub async fn update(&self, order_item_id: &str, patch: OrderItemUpdate) -> AppResult<UpdateAck> {
        let unit_price = patch
            .unit_price
            .map(|p| money::validate_price("unit_price", p, self.max_price))
            .transpose()?;
        if let Some(quantity) = patch.quantity
            && quantity < 1
        {
            return Err(AppError::validation(format!("quantity must be positive, got {}", quantity))
                .with_detail("field", "quantity"));
        }

        PartialUpdate::new()
            .field("unit_price", unit_price.map(money::to_f64))
            .field("quantity", patch.quantity)
            .reference("food_id", patch.food_id, Collection::Food)
            .apply(self.items.base(), Collection::OrderItem, order_item_id)
            .await
    }
}
