//! SurrealDB-backed document store
//!
//! Documents are stored schemaless, one SurrealDB table per collection.
//! The storage record id is never exposed: reads `OMIT id` and writes
//! return nothing or a projection of the public id field.

use super::repository::{RepoError, RepoResult};
use super::store::{Collection, Document, DocumentStore, FieldSet, Filter, UpdateAck};
use async_trait::async_trait;
use serde_json::Value;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct SurrealStore {
    db: Surreal<Db>,
}

impl SurrealStore {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Field paths are spliced into SurrealQL, so only plain identifiers pass
fn check_field(path: &str) -> RepoResult<&str> {
    let valid = !path.is_empty()
        && path.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
    if valid {
        Ok(path)
    } else {
        Err(RepoError::Validation(format!("Invalid field path: {}", path)))
    }
}

/// `WHERE` clause with positional parameters `$p0, $p1, ...`
fn where_clause(filter: &Filter) -> RepoResult<(String, Vec<(String, Value)>)> {
    if filter.is_empty() {
        return Ok((String::new(), Vec::new()));
    }
    let mut parts = Vec::with_capacity(filter.conditions().len());
    let mut binds = Vec::with_capacity(filter.conditions().len());
    for (i, (field, value)) in filter.conditions().iter().enumerate() {
        let param = format!("p{}", i);
        parts.push(format!("{} = ${}", check_field(field)?, param));
        binds.push((param, value.clone()));
    }
    Ok((format!(" WHERE {}", parts.join(" AND ")), binds))
}

fn into_documents(rows: Vec<Value>) -> RepoResult<Vec<Document>> {
    rows.into_iter()
        .map(|row| match row {
            Value::Object(doc) => Ok(doc),
            other => Err(RepoError::Decode(format!(
                "Expected a document, got {}",
                other
            ))),
        })
        .collect()
}

#[async_trait]
impl DocumentStore for SurrealStore {
    async fn find(&self, collection: Collection, filter: &Filter) -> RepoResult<Vec<Document>> {
        let (clause, binds) = where_clause(filter)?;
        let sql = format!(
            "SELECT * OMIT id FROM type::table($table){} ORDER BY {}",
            clause,
            collection.id_field()
        );
        let mut query = self.db.query(sql).bind(("table", collection.name()));
        for bind in binds {
            query = query.bind(bind);
        }
        let rows: Vec<Value> = query.await?.take(0)?;
        into_documents(rows)
    }

    async fn insert(&self, collection: Collection, doc: Document) -> RepoResult<()> {
        self.db
            .query("CREATE type::table($table) CONTENT $doc RETURN NONE")
            .bind(("table", collection.name()))
            .bind(("doc", Value::Object(doc)))
            .await?
            .check()?;
        Ok(())
    }

    async fn update_sparse(
        &self,
        collection: Collection,
        filter: &Filter,
        fields: &FieldSet,
        upsert: bool,
    ) -> RepoResult<UpdateAck> {
        if fields.is_empty() {
            return Err(RepoError::Validation("Empty field set".to_string()));
        }

        let (clause, filter_binds) = where_clause(filter)?;
        let mut assignments = Vec::with_capacity(fields.len());
        let mut set_binds = Vec::with_capacity(fields.len());
        for (i, (field, value)) in fields.iter().enumerate() {
            let param = format!("s{}", i);
            assignments.push(format!("{} = ${}", check_field(field)?, param));
            set_binds.push((param, value.clone()));
        }

        let id_field = collection.id_field();
        let sql = format!(
            "UPDATE type::table($table) SET {}{} RETURN {}",
            assignments.join(", "),
            clause,
            id_field
        );
        let mut query = self.db.query(sql).bind(("table", collection.name()));
        for bind in filter_binds.into_iter().chain(set_binds) {
            query = query.bind(bind);
        }
        let touched: Vec<Value> = query.await?.take(0)?;

        if !touched.is_empty() {
            let count = touched.len() as u64;
            return Ok(UpdateAck {
                matched_count: count,
                modified_count: count,
                upserted: false,
            });
        }
        if !upsert {
            return Ok(UpdateAck::default());
        }

        let mut doc = Document::new();
        for (field, value) in filter.conditions() {
            super::store::set_path(&mut doc, field, value.clone());
        }
        fields.apply_to(&mut doc);
        self.insert(collection, doc).await?;
        tracing::debug!(collection = %collection, "Upserted document");
        Ok(UpdateAck {
            matched_count: 0,
            modified_count: 0,
            upserted: true,
        })
    }
}

/// Open an embedded RocksDB-backed store
pub async fn open_rocksdb(
    path: &std::path::Path,
    namespace: &str,
    database: &str,
) -> RepoResult<SurrealStore> {
    let db = Surreal::new::<surrealdb::engine::local::RocksDb>(path).await?;
    db.use_ns(namespace).use_db(database).await?;
    Ok(SurrealStore::new(db))
}

/// Open a process-local in-memory store
pub async fn open_memory(namespace: &str, database: &str) -> RepoResult<SurrealStore> {
    let db = Surreal::new::<surrealdb::engine::local::Mem>(()).await?;
    db.use_ns(namespace).use_db(database).await?;
    Ok(SurrealStore::new(db))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_field_accepts_identifiers_only() {
        assert!(check_field("order_id").is_ok());
        assert!(check_field("order.table_id").is_ok());
        assert!(check_field("_private").is_ok());
        assert!(check_field("").is_err());
        assert!(check_field("1abc").is_err());
        assert!(check_field("name; DELETE food").is_err());
        assert!(check_field("a..b").is_err());
    }

    #[test]
    fn test_where_clause_positional_params() {
        let (clause, binds) = where_clause(&Filter::all()).unwrap();
        assert!(clause.is_empty());
        assert!(binds.is_empty());

        let filter = Filter::eq("order_id", "o1").and_eq("food_id", "f1");
        let (clause, binds) = where_clause(&filter).unwrap();
        assert_eq!(clause, " WHERE order_id = $p0 AND food_id = $p1");
        assert_eq!(binds[1], ("p1".to_string(), json!("f1")));
    }
}
