//! Document store abstraction
//!
//! Collections hold schemaless JSON documents. Everything above this layer
//! talks to a [`DocumentStore`]; the SurrealDB implementation lives in
//! [`super::surreal`].

use super::repository::RepoResult;
use crate::pipeline::{self, Pipeline};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A stored document
pub type Document = Map<String, Value>;

/// Entity collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Food,
    Menu,
    Order,
    OrderItem,
    Table,
    Invoice,
    User,
}

impl Collection {
    /// Storage table name
    pub const fn name(&self) -> &'static str {
        match self {
            Collection::Food => "food",
            Collection::Menu => "menu",
            Collection::Order => "order",
            Collection::OrderItem => "order_item",
            Collection::Table => "table",
            Collection::Invoice => "invoice",
            Collection::User => "user",
        }
    }

    /// Field carrying the entity's public id
    pub const fn id_field(&self) -> &'static str {
        match self {
            Collection::Food => "food_id",
            Collection::Menu => "menu_id",
            Collection::Order => "order_id",
            Collection::OrderItem => "order_item_id",
            Collection::Table => "table_id",
            Collection::Invoice => "invoice_id",
            Collection::User => "user_id",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a dotted path (`order.table_id`) inside a document
pub fn get_path<'a>(doc: &'a Document, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = doc.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Write a value at a dotted path, creating intermediate objects
pub fn set_path(doc: &mut Document, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            doc.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let slot = doc
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(inner) = slot {
                set_path(inner, rest, value);
            }
        }
    }
}

/// Conjunction of field equality conditions; empty matches everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    /// Match every document
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().and_eq(field, value)
    }

    pub fn and_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate in process; a missing path compares as `null`
    pub fn matches(&self, doc: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| get_path(doc, field).unwrap_or(&Value::Null) == expected)
    }
}

/// Ordered set of field assignments for a sparse update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    fields: Vec<(String, Value)>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a field; a repeated name replaces the earlier value in place
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        let field = field.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Overlay the assignments onto a document
    pub fn apply_to(&self, doc: &mut Document) {
        for (field, value) in &self.fields {
            set_path(doc, field, value.clone());
        }
    }
}

/// Outcome of a sparse update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateAck {
    pub matched_count: u64,
    pub modified_count: u64,
    /// A document was created because the filter matched nothing
    pub upserted: bool,
}

/// Storage port used by the repositories
///
/// Implementations report failures as [`RepoError`](super::repository::RepoError);
/// deadlines are applied one level up, by the repository layer.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents matching the filter, ordered by the collection's id field
    async fn find(&self, collection: Collection, filter: &Filter) -> RepoResult<Vec<Document>>;

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> RepoResult<Option<Document>> {
        Ok(self.find(collection, filter).await?.into_iter().next())
    }

    async fn insert(&self, collection: Collection, doc: Document) -> RepoResult<()>;

    /// Set only the given fields on matching documents. With `upsert`, an
    /// unmatched filter creates a document from the filter's equality
    /// fields plus the field set.
    async fn update_sparse(
        &self,
        collection: Collection,
        filter: &Filter,
        fields: &FieldSet,
        upsert: bool,
    ) -> RepoResult<UpdateAck>;

    /// Run a stage pipeline rooted at `collection`
    async fn aggregate(
        &self,
        collection: Collection,
        pipeline: &Pipeline,
    ) -> RepoResult<Vec<Document>> {
        pipeline::execute(self, collection, pipeline).await
    }
}
