//! Dining table use cases

use crate::db::repository::{BaseRepository, DiningTableRepository};
use crate::db::store::{Collection, UpdateAck};
use crate::update::PartialUpdate;
use shared::error::AppResult;
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use shared::util;
use validator::Validate;

#[derive(Clone)]
pub struct DiningTableService {
    tables: DiningTableRepository,
}

impl DiningTableService {
    pub fn new(base: BaseRepository) -> Self {
        Self {
            tables: DiningTableRepository::new(base),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<DiningTable>> {
        Ok(self.tables.find_all().await?)
    }

    pub async fn get(&self, table_id: &str) -> AppResult<DiningTable> {
        Ok(self.tables.get(table_id).await?)
    }

    pub async fn create(&self, payload: DiningTableCreate) -> AppResult<DiningTable> {
        payload.validate()?;
        let now = util::now();
        let table = DiningTable {
            table_id: util::new_id(),
            number_of_guests: payload.number_of_guests,
            table_number: payload.table_number,
            created_at: now,
            updated_at: now,
        };
        self.tables.create(&table).await?;
        tracing::info!(table_id = %table.table_id, table_number = table.table_number, "Table created");
        Ok(table)
    }

    pub async fn update(&self, table_id: &str, patch: DiningTableUpdate) -> AppResult<UpdateAck> {
        PartialUpdate::new()
            .field("number_of_guests", patch.number_of_guests)
            .field("table_number", patch.table_number)
            .apply(self.tables.base(), Collection::Table, table_id)
            .await
    }
}
