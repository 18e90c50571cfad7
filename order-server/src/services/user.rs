//! User read use cases

use crate::db::repository::{BaseRepository, UserRepository};
use crate::pagination::{Page, PageQuery};
use shared::error::AppResult;
use shared::models::UserSummary;

#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    pub fn new(base: BaseRepository) -> Self {
        Self {
            users: UserRepository::new(base),
        }
    }

    /// Paged listing, projected to the public fields
    pub async fn list(&self, query: &PageQuery) -> AppResult<Page<UserSummary>> {
        Ok(self.users.find_page(query).await?.map(UserSummary::from))
    }

    pub async fn get(&self, user_id: &str) -> AppResult<UserSummary> {
        Ok(self.users.get(user_id).await?.into())
    }
}
