//! Order Repository

use super::{Entity, EntityRepository};
use crate::db::store::Collection;
use shared::models::Order;

impl Entity for Order {
    const COLLECTION: Collection = Collection::Order;
    const LABEL: &'static str = "Order";
}

pub type OrderRepository = EntityRepository<Order>;
