//! Order line Repository

use super::{Entity, EntityRepository, RepoResult, decode, encode};
use crate::db::store::Collection;
use crate::orders::summary;
use shared::models::{OrderItem, OrderSummary};

impl Entity for OrderItem {
    const COLLECTION: Collection = Collection::OrderItem;
    const LABEL: &'static str = "Order item";
}

pub type OrderItemRepository = EntityRepository<OrderItem>;

impl EntityRepository<OrderItem> {
    /// Insert a batch of lines, in order
    pub async fn create_many(&self, items: &[OrderItem]) -> RepoResult<()> {
        for item in items {
            self.base().insert(Collection::OrderItem, encode(item)?).await?;
        }
        Ok(())
    }

    /// Per-order summaries of the joined lines; empty when nothing matches
    pub async fn summaries_by_order(&self, order_id: &str) -> RepoResult<Vec<OrderSummary>> {
        let docs = self
            .base()
            .aggregate(Collection::OrderItem, &summary::pipeline(order_id))
            .await?;
        tracing::debug!(order_id, groups = docs.len(), "Aggregated order lines");
        docs.into_iter().map(decode).collect()
    }
}
