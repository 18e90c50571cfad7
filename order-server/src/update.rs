//! Partial-update builder
//!
//! Turns a patch of optional fields into the minimal field set for a
//! sparse update. A field is written iff it is `Some`, including empty
//! strings. Reference fields are resolved before anything is written, and
//! `updated_at` is always refreshed.

use crate::db::repository::BaseRepository;
use crate::db::store::{Collection, FieldSet, Filter, UpdateAck};
use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::util;

pub const UPDATED_AT: &str = "updated_at";

struct Reference {
    field: &'static str,
    id: String,
    target: Collection,
}

#[derive(Default)]
pub struct PartialUpdate {
    fields: FieldSet,
    references: Vec<Reference>,
    /// First serialization failure, reported by `build`
    error: Option<AppError>,
}

impl PartialUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include `field` when the patch carries a value for it
    pub fn field<T: Serialize>(mut self, field: &'static str, value: Option<T>) -> Self {
        if let Some(value) = value {
            match serde_json::to_value(value) {
                Ok(json) => self.fields.set(field, json),
                Err(e) => {
                    self.error.get_or_insert_with(|| {
                        AppError::invalid_request(format!("{}: {}", field, e))
                    });
                }
            }
        }
        self
    }

    /// Include a reference field; it must name an existing `target` entity
    pub fn reference(mut self, field: &'static str, id: Option<String>, target: Collection) -> Self {
        if let Some(id) = id {
            self.fields.set(field, serde_json::Value::String(id.clone()));
            self.references.push(Reference { field, id, target });
        }
        self
    }

    /// No patch field was present
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolve references and produce the field set, `updated_at` last
    pub async fn build(self, repo: &BaseRepository) -> AppResult<FieldSet> {
        if let Some(err) = self.error {
            return Err(err);
        }

        for reference in &self.references {
            let filter = Filter::eq(reference.target.id_field(), reference.id.as_str());
            if repo.find_one(reference.target, &filter).await?.is_none() {
                tracing::warn!(
                    field = reference.field,
                    id = %reference.id,
                    target = %reference.target,
                    "Update rejected: reference does not resolve"
                );
                return Err(AppError::reference_not_found(reference.field, reference.id.clone()));
            }
        }

        let mut fields = self.fields;
        let now = serde_json::to_value(util::now())
            .map_err(|e| AppError::internal(format!("{}: {}", UPDATED_AT, e)))?;
        fields.set(UPDATED_AT, now);
        Ok(fields)
    }

    /// Build and write with upsert keyed on the entity id
    pub async fn apply(
        self,
        repo: &BaseRepository,
        collection: Collection,
        id: &str,
    ) -> AppResult<UpdateAck> {
        let fields = self.build(repo).await?;
        let filter = Filter::eq(collection.id_field(), id);
        let ack = repo.update_sparse(collection, &filter, &fields, true).await?;
        tracing::info!(
            collection = %collection,
            id,
            fields = ?fields.names().collect::<Vec<_>>(),
            upserted = ack.upserted,
            "Applied partial update"
        );
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{RepoError, RepoResult};
    use crate::db::store::{Document, DocumentStore};
    use async_trait::async_trait;
    use serde_json::json;
    use shared::ErrorCode;
    use std::sync::Arc;
    use std::time::Duration;

    /// Knows one menu and refuses every write
    struct Lookups;

    #[async_trait]
    impl DocumentStore for Lookups {
        async fn find(&self, collection: Collection, filter: &Filter) -> RepoResult<Vec<Document>> {
            let menu: Document = json!({"menu_id": "m1"}).as_object().cloned().unwrap();
            Ok(if collection == Collection::Menu && filter.matches(&menu) {
                vec![menu]
            } else {
                Vec::new()
            })
        }

        async fn insert(&self, _: Collection, _: Document) -> RepoResult<()> {
            Err(RepoError::Database("unexpected write".into()))
        }

        async fn update_sparse(
            &self,
            _: Collection,
            _: &Filter,
            _: &FieldSet,
            _: bool,
        ) -> RepoResult<UpdateAck> {
            Err(RepoError::Database("unexpected write".into()))
        }
    }

    fn repo() -> BaseRepository {
        BaseRepository::new(Arc::new(Lookups), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_only_present_fields_are_included() {
        let fields = PartialUpdate::new()
            .field("name", Some(""))
            .field("food_image", None::<String>)
            .field("price", Some(4.5))
            .build(&repo())
            .await
            .unwrap();
        let names: Vec<&str> = fields.names().collect();
        assert_eq!(names, vec!["name", "price", UPDATED_AT]);
        assert_eq!(fields.get("name"), Some(&json!("")));
    }

    #[tokio::test]
    async fn test_empty_patch_still_refreshes_updated_at() {
        let update = PartialUpdate::new().field("name", None::<String>);
        assert!(update.is_empty());
        let fields = update.build(&repo()).await.unwrap();
        assert_eq!(fields.len(), 1);
        assert!(fields.contains(UPDATED_AT));
    }

    #[tokio::test]
    async fn test_resolved_reference_is_written() {
        let fields = PartialUpdate::new()
            .reference("menu_id", Some("m1".into()), Collection::Menu)
            .build(&repo())
            .await
            .unwrap();
        assert_eq!(fields.get("menu_id"), Some(&json!("m1")));
    }

    #[tokio::test]
    async fn test_unresolved_reference_aborts_before_write() {
        let err = PartialUpdate::new()
            .field("name", Some("Soup"))
            .reference("menu_id", Some("nope".into()), Collection::Menu)
            .apply(&repo(), Collection::Food, "f1")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ReferenceNotFound);
        assert_eq!(err.details.unwrap().get("id").unwrap(), "nope");
    }
}
