//! Food use cases

use crate::db::repository::{BaseRepository, FoodRepository, MenuRepository};
use crate::db::store::{Collection, UpdateAck};
use crate::money;
use crate::pagination::{Page, PageQuery};
use crate::update::PartialUpdate;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{Food, FoodCreate, FoodUpdate};
use shared::util;
use validator::Validate;

#[derive(Clone)]
pub struct FoodService {
    foods: FoodRepository,
    menus: MenuRepository,
    max_price: Decimal,
}

impl FoodService {
    pub fn new(base: BaseRepository, max_price: Decimal) -> Self {
        Self {
            foods: FoodRepository::new(base.clone()),
            menus: MenuRepository::new(base),
            max_price,
        }
    }

    /// Paged listing
    pub async fn list(&self, query: &PageQuery) -> AppResult<Page<Food>> {
        Ok(self.foods.find_page(query).await?)
    }

    pub async fn get(&self, food_id: &str) -> AppResult<Food> {
        Ok(self.foods.get(food_id).await?)
    }

    /// Create a food on an existing menu; the price is rounded to 2 dp
    pub async fn create(&self, payload: FoodCreate) -> AppResult<Food> {
        payload.validate()?;
        let price = money::validate_price("price", payload.price, self.max_price)?;
        if !self.menus.exists(&payload.menu_id).await? {
            return Err(AppError::reference_not_found("menu_id", payload.menu_id));
        }

        let now = util::now();
        let food = Food {
            food_id: util::new_id(),
            name: payload.name,
            price,
            food_image: payload.food_image,
            menu_id: payload.menu_id,
            created_at: now,
            updated_at: now,
        };
        self.foods.create(&food).await?;
        tracing::info!(food_id = %food.food_id, menu_id = %food.menu_id, "Food created");
        Ok(food)
    }

    pub async fn update(&self, food_id: &str, patch: FoodUpdate) -> AppResult<UpdateAck> {
        let price = patch
            .price
            .map(|p| money::validate_price("price", p, self.max_price))
            .transpose()?;
        PartialUpdate::new()
            .field("name", patch.name)
            .field("price", price.map(money::to_f64))
            .field("food_image", patch.food_image)
            .reference("menu_id", patch.menu_id, Collection::Menu)
            .apply(self.foods.base(), Collection::Food, food_id)
            .await
    }
}
