//! Aggregation pipeline
//!
//! A small stage language over documents: match, left-join (lookup with
//! unwind that preserves unmatched records), project and group. Pipelines
//! are built with the chaining methods on [`Pipeline`] and run by
//! [`execute`] against any [`DocumentStore`](crate::db::store::DocumentStore).

mod executor;

pub use executor::execute;

use crate::db::store::{Collection, Filter};
use serde_json::Value;

/// Value expression evaluated against one document
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Dotted field path; a missing path evaluates to `null`
    Field(String),
    /// The whole current document
    Root,
    Literal(Value),
    /// Sub-range of an array field; non-arrays evaluate to `null`
    Slice {
        field: String,
        start: usize,
        len: usize,
    },
}

impl Expr {
    pub fn field(path: impl Into<String>) -> Self {
        Expr::Field(path.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Accumulator {
    /// Exact decimal sum; non-numeric values contribute nothing
    Sum(Expr),
    Count,
    /// Collect values in input order
    Push(Expr),
}

/// Left join with unwind: one output per foreign match, or the input
/// record with `as_field = null` when nothing matches
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    pub from: Collection,
    pub local_field: String,
    pub foreign_field: String,
    pub as_field: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Key fields; empty groups everything into one record with `_id = null`
    pub key: Vec<(String, Expr)>,
    pub accumulators: Vec<(String, Accumulator)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Match(Filter),
    Lookup(Lookup),
    Project(Vec<(String, Expr)>),
    Group(Group),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn matching(mut self, filter: Filter) -> Self {
        self.stages.push(Stage::Match(filter));
        self
    }

    pub fn lookup(
        mut self,
        from: Collection,
        local_field: &str,
        foreign_field: &str,
        as_field: &str,
    ) -> Self {
        self.stages.push(Stage::Lookup(Lookup {
            from,
            local_field: local_field.to_string(),
            foreign_field: foreign_field.to_string(),
            as_field: as_field.to_string(),
        }));
        self
    }

    pub fn project<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Expr)>,
        S: Into<String>,
    {
        self.stages.push(Stage::Project(
            fields.into_iter().map(|(name, expr)| (name.into(), expr)).collect(),
        ));
        self
    }

    pub fn group<K, A, S>(mut self, key: K, accumulators: A) -> Self
    where
        K: IntoIterator<Item = (S, Expr)>,
        A: IntoIterator<Item = (S, Accumulator)>,
        S: Into<String>,
    {
        self.stages.push(Stage::Group(Group {
            key: key.into_iter().map(|(name, expr)| (name.into(), expr)).collect(),
            accumulators: accumulators
                .into_iter()
                .map(|(name, acc)| (name.into(), acc))
                .collect(),
        }));
        self
    }
}
