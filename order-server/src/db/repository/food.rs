//! Food Repository

use super::{Entity, EntityRepository};
use crate::db::store::Collection;
use shared::models::Food;

impl Entity for Food {
    const COLLECTION: Collection = Collection::Food;
    const LABEL: &'static str = "Food";
}

pub type FoodRepository = EntityRepository<Food>;
