//! Dining Table Repository

use super::{Entity, EntityRepository};
use crate::db::store::Collection;
use shared::models::DiningTable;

impl Entity for DiningTable {
    const COLLECTION: Collection = Collection::Table;
    const LABEL: &'static str = "Table";
}

pub type DiningTableRepository = EntityRepository<DiningTable>;
