//! In-process pipeline execution
//!
//! A leading `Match` is pushed down to the store's `find`; every other
//! stage runs over the documents in memory. Lookups issue one `find` per
//! distinct local value within a stage.

use super::{Accumulator, Expr, Group, Lookup, Pipeline, Stage};
use crate::db::repository::RepoResult;
use crate::db::store::{Collection, Document, DocumentStore, Filter, get_path, set_path};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

/// Run `pipeline` over `collection`
pub async fn execute<S>(
    store: &S,
    collection: Collection,
    pipeline: &Pipeline,
) -> RepoResult<Vec<Document>>
where
    S: DocumentStore + ?Sized,
{
    let stages = pipeline.stages();
    let (initial, rest) = match stages.first() {
        Some(Stage::Match(filter)) => (filter.clone(), &stages[1..]),
        _ => (Filter::all(), stages),
    };

    let mut docs = store.find(collection, &initial).await?;
    tracing::debug!(collection = %collection, count = docs.len(), "Pipeline source");

    for stage in rest {
        docs = match stage {
            Stage::Match(filter) => docs.into_iter().filter(|d| filter.matches(d)).collect(),
            Stage::Lookup(lookup) => join(store, lookup, docs).await?,
            Stage::Project(fields) => docs.iter().map(|d| project(d, fields)).collect(),
            Stage::Group(group) => group_docs(group, &docs),
        };
    }
    Ok(docs)
}

async fn join<S>(store: &S, lookup: &Lookup, docs: Vec<Document>) -> RepoResult<Vec<Document>>
where
    S: DocumentStore + ?Sized,
{
    let mut cache: HashMap<String, Vec<Document>> = HashMap::new();
    let mut out = Vec::with_capacity(docs.len());

    for doc in docs {
        let local = get_path(&doc, &lookup.local_field)
            .filter(|v| !v.is_null())
            .cloned();
        let matches = match local {
            None => Vec::new(),
            Some(value) => {
                let key = value.to_string();
                if !cache.contains_key(&key) {
                    let found = store
                        .find(lookup.from, &Filter::eq(lookup.foreign_field.clone(), value))
                        .await?;
                    cache.insert(key.clone(), found);
                }
                cache.get(&key).cloned().unwrap_or_default()
            }
        };

        if matches.is_empty() {
            let mut doc = doc;
            set_path(&mut doc, &lookup.as_field, Value::Null);
            out.push(doc);
        } else {
            for foreign in matches {
                let mut joined = doc.clone();
                set_path(&mut joined, &lookup.as_field, Value::Object(foreign));
                out.push(joined);
            }
        }
    }
    tracing::debug!(from = %lookup.from, lookups = cache.len(), "Joined");
    Ok(out)
}

fn eval(expr: &Expr, doc: &Document) -> Value {
    match expr {
        Expr::Field(path) => get_path(doc, path).cloned().unwrap_or(Value::Null),
        Expr::Root => Value::Object(doc.clone()),
        Expr::Literal(value) => value.clone(),
        Expr::Slice { field, start, len } => match get_path(doc, field) {
            Some(Value::Array(items)) => {
                Value::Array(items.iter().skip(*start).take(*len).cloned().collect())
            }
            _ => Value::Null,
        },
    }
}

fn project(doc: &Document, fields: &[(String, Expr)]) -> Document {
    fields
        .iter()
        .map(|(name, expr)| (name.clone(), eval(expr, doc)))
        .collect()
}

/// Exact decimal view of a JSON number
fn to_decimal(value: &Value) -> Option<Decimal> {
    let Value::Number(n) = value else {
        return None;
    };
    let text = n.to_string();
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

fn decimal_to_json(value: Decimal) -> Value {
    value
        .to_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

enum AccState {
    Sum(Decimal),
    Count(i64),
    Push(Vec<Value>),
}

impl AccState {
    fn new(acc: &Accumulator) -> Self {
        match acc {
            Accumulator::Sum(_) => AccState::Sum(Decimal::ZERO),
            Accumulator::Count => AccState::Count(0),
            Accumulator::Push(_) => AccState::Push(Vec::new()),
        }
    }

    fn feed(&mut self, acc: &Accumulator, doc: &Document) {
        match (self, acc) {
            (AccState::Sum(total), Accumulator::Sum(expr)) => {
                if let Some(v) = to_decimal(&eval(expr, doc)) {
                    *total += v;
                }
            }
            (AccState::Count(n), Accumulator::Count) => *n += 1,
            (AccState::Push(items), Accumulator::Push(expr)) => items.push(eval(expr, doc)),
            _ => {}
        }
    }

    fn finish(self) -> Value {
        match self {
            AccState::Sum(total) => decimal_to_json(total),
            AccState::Count(n) => Value::Number(n.into()),
            AccState::Push(items) => Value::Array(items),
        }
    }
}

/// Groups come out in order of first appearance
fn group_docs(group: &Group, docs: &[Document]) -> Vec<Document> {
    let mut groups: Vec<(Value, Vec<AccState>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for doc in docs {
        let key = if group.key.is_empty() {
            Value::Null
        } else {
            Value::Object(
                group
                    .key
                    .iter()
                    .map(|(name, expr)| (name.clone(), eval(expr, doc)))
                    .collect::<Map<_, _>>(),
            )
        };
        let slot = *index.entry(key.to_string()).or_insert_with(|| {
            let states = group.accumulators.iter().map(|(_, a)| AccState::new(a)).collect();
            groups.push((key, states));
            groups.len() - 1
        });
        for (state, (_, acc)) in groups[slot].1.iter_mut().zip(&group.accumulators) {
            state.feed(acc, doc);
        }
    }

    groups
        .into_iter()
        .map(|(key, states)| {
            let mut out = Document::new();
            out.insert("_id".to_string(), key);
            for ((name, _), state) in group.accumulators.iter().zip(states) {
                out.insert(name.clone(), state.finish());
            }
            out
        })
        .collect()
}
