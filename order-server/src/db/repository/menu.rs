//! Menu Repository

use super::{Entity, EntityRepository};
use crate::db::store::Collection;
use shared::models::Menu;

impl Entity for Menu {
    const COLLECTION: Collection = Collection::Menu;
    const LABEL: &'static str = "Menu";
}

pub type MenuRepository = EntityRepository<Menu>;
