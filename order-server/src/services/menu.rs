//! Menu use cases

use crate::db::repository::{BaseRepository, MenuRepository};
use crate::db::store::{Collection, UpdateAck};
use crate::update::PartialUpdate;
use chrono::{DateTime, Utc};
use shared::error::{AppError, AppResult};
use shared::models::{Menu, MenuCreate, MenuUpdate};
use shared::util;
use validator::Validate;

/// Window check applied when an update carries both dates
///
/// Accepts only `start > now && end > start`, so a window that has
/// already started is rejected.
pub fn in_time_span(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start > now && end > start
}

#[derive(Clone)]
pub struct MenuService {
    menus: MenuRepository,
}

impl MenuService {
    pub fn new(base: BaseRepository) -> Self {
        Self {
            menus: MenuRepository::new(base),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Menu>> {
        Ok(self.menus.find_all().await?)
    }

    pub async fn get(&self, menu_id: &str) -> AppResult<Menu> {
        Ok(self.menus.get(menu_id).await?)
    }

    pub async fn create(&self, payload: MenuCreate) -> AppResult<Menu> {
        payload.validate()?;
        let now = util::now();
        let menu = Menu {
            menu_id: util::new_id(),
            name: payload.name,
            category: payload.category,
            start_date: payload.start_date,
            end_date: payload.end_date,
            created_at: now,
            updated_at: now,
        };
        self.menus.create(&menu).await?;
        tracing::info!(menu_id = %menu.menu_id, "Menu created");
        Ok(menu)
    }

    /// A single date bound is written without a range check
    pub async fn update(&self, menu_id: &str, patch: MenuUpdate) -> AppResult<UpdateAck> {
        if let (Some(start), Some(end)) = (patch.start_date, patch.end_date)
            && !in_time_span(start, end, util::now())
        {
            tracing::warn!(menu_id, %start, %end, "Menu update rejected: invalid date window");
            return Err(AppError::validation("Menu window must start in the future and end after it starts")
                .with_detail("start_date", start.to_rfc3339())
                .with_detail("end_date", end.to_rfc3339()));
        }

        PartialUpdate::new()
            .field("name", patch.name)
            .field("category", patch.category)
            .field("start_date", patch.start_date)
            .field("end_date", patch.end_date)
            .apply(self.menus.base(), Collection::Menu, menu_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_in_time_span_requires_future_start() {
        let now = Utc::now();
        let hour = Duration::hours(1);
        assert!(in_time_span(now + hour, now + hour * 2, now));
        // started already
        assert!(!in_time_span(now - hour, now + hour, now));
        // end before start
        assert!(!in_time_span(now + hour * 2, now + hour, now));
        // equal bounds
        assert!(!in_time_span(now + hour, now + hour, now));
    }
}
