//! Repository Module
//!
//! Typed, deadline-bounded access to the entity collections. No business
//! rules live here: reference checks and validation belong to the services.

pub mod dining_table;
pub mod food;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod order_item;
pub mod user;

// Re-exports
pub use dining_table::DiningTableRepository;
pub use food::FoodRepository;
pub use invoice::InvoiceRepository;
pub use menu::MenuRepository;
pub use order::OrderRepository;
pub use order_item::OrderItemRepository;
pub use user::UserRepository;

use super::store::{Collection, Document, DocumentStore, FieldSet, Filter, UpdateAck};
use crate::pipeline::Pipeline;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::AppError;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed document: {0}")]
    Decode(String),

    #[error("Timed out: {0}")]
    Timeout(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Decode(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(what) => AppError::not_found(what),
            RepoError::Database(msg) => AppError::storage(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Decode(msg) => AppError::internal(msg),
            RepoError::Timeout(msg) => AppError::timeout(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Shared store handle plus the per-operation deadline
#[derive(Clone)]
pub struct BaseRepository {
    store: Arc<dyn DocumentStore>,
    deadline: Duration,
}

impl BaseRepository {
    pub fn new(store: Arc<dyn DocumentStore>, deadline: Duration) -> Self {
        Self { store, deadline }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Run one storage operation under the deadline; on expiry the
    /// operation future is dropped and `Timeout` is reported
    async fn bounded<T>(
        &self,
        op: &'static str,
        collection: Collection,
        fut: impl Future<Output = RepoResult<T>>,
    ) -> RepoResult<T> {
        match tokio::time::timeout(self.deadline, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                if let RepoError::Database(msg) = &err {
                    tracing::error!(op, collection = %collection, error = %msg, "Storage operation failed");
                }
                Err(err)
            }
            Err(_) => {
                tracing::warn!(
                    op,
                    collection = %collection,
                    deadline_ms = self.deadline.as_millis() as u64,
                    "Storage operation timed out"
                );
                Err(RepoError::Timeout(format!(
                    "{} on {} exceeded {}ms",
                    op,
                    collection,
                    self.deadline.as_millis()
                )))
            }
        }
    }

    pub async fn find(&self, collection: Collection, filter: &Filter) -> RepoResult<Vec<Document>> {
        self.bounded("find", collection, self.store.find(collection, filter))
            .await
    }

    pub async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> RepoResult<Option<Document>> {
        self.bounded("find_one", collection, self.store.find_one(collection, filter))
            .await
    }

    pub async fn insert(&self, collection: Collection, doc: Document) -> RepoResult<()> {
        self.bounded("insert", collection, self.store.insert(collection, doc))
            .await
    }

    pub async fn update_sparse(
        &self,
        collection: Collection,
        filter: &Filter,
        fields: &FieldSet,
        upsert: bool,
    ) -> RepoResult<UpdateAck> {
        self.bounded(
            "update",
            collection,
            self.store.update_sparse(collection, filter, fields, upsert),
        )
        .await
    }

    /// The whole pipeline shares one deadline
    pub async fn aggregate(
        &self,
        collection: Collection,
        pipeline: &Pipeline,
    ) -> RepoResult<Vec<Document>> {
        self.bounded("aggregate", collection, self.store.aggregate(collection, pipeline))
            .await
    }
}

/// A stored entity type
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: Collection;
    /// Human-readable name used in messages
    const LABEL: &'static str;
}

pub(crate) fn decode<T: DeserializeOwned>(doc: Document) -> RepoResult<T> {
    Ok(serde_json::from_value(Value::Object(doc))?)
}

pub(crate) fn encode<T: Serialize>(entity: &T) -> RepoResult<Document> {
    match serde_json::to_value(entity)? {
        Value::Object(doc) => Ok(doc),
        other => Err(RepoError::Decode(format!(
            "Entity did not serialize to a document: {}",
            other
        ))),
    }
}

/// Generic typed repository over one entity collection
pub struct EntityRepository<T> {
    base: BaseRepository,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for EntityRepository<T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> EntityRepository<T> {
    pub fn new(base: BaseRepository) -> Self {
        Self {
            base,
            _entity: PhantomData,
        }
    }

    pub fn base(&self) -> &BaseRepository {
        &self.base
    }

    fn by_id(id: &str) -> Filter {
        Filter::eq(T::COLLECTION.id_field(), id)
    }

    /// Find all entities
    pub async fn find_all(&self) -> RepoResult<Vec<T>> {
        let docs = self.base.find(T::COLLECTION, &Filter::all()).await?;
        tracing::debug!(collection = %T::COLLECTION, count = docs.len(), "Listed documents");
        docs.into_iter().map(decode).collect()
    }

    /// Find entity by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<T>> {
        self.base
            .find_one(T::COLLECTION, &Self::by_id(id))
            .await?
            .map(decode)
            .transpose()
    }

    /// Find entity by id, failing with `NotFound` when absent
    pub async fn get(&self, id: &str) -> RepoResult<T> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("{} {}", T::LABEL, id)))
    }

    pub async fn exists(&self, id: &str) -> RepoResult<bool> {
        Ok(self
            .base
            .find_one(T::COLLECTION, &Self::by_id(id))
            .await?
            .is_some())
    }

    /// Insert a fully-formed entity
    pub async fn create(&self, entity: &T) -> RepoResult<()> {
        self.base.insert(T::COLLECTION, encode(entity)?).await
    }
}
