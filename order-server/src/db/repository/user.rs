//! User Repository
//!
//! Read-only: user documents are written by the auth layer.

use super::{Entity, EntityRepository};
use crate::db::store::Collection;
use shared::models::User;

impl Entity for User {
    const COLLECTION: Collection = Collection::User;
    const LABEL: &'static str = "User";
}

pub type UserRepository = EntityRepository<User>;
