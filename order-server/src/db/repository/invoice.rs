//! Invoice Repository

use super::{Entity, EntityRepository};
use crate::db::store::Collection;
use shared::models::Invoice;

impl Entity for Invoice {
    const COLLECTION: Collection = Collection::Invoice;
    const LABEL: &'static str = "Invoice";
}

pub type InvoiceRepository = EntityRepository<Invoice>;
