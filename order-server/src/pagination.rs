//! Paged listings
//!
//! A listing is match-all, then one group over everything carrying the
//! total count and every document, then a slice of that array.

use crate::db::repository::{Entity, EntityRepository, RepoError, RepoResult, decode};
use crate::db::store::{Document, Filter};
use crate::pipeline::{Accumulator, Expr, Pipeline};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_RECORDS_PER_PAGE: usize = 10;

/// Raw paging parameters as they arrive from a query string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    #[serde(rename = "recordsPerPage", alias = "recordPerPage")]
    pub records_per_page: Option<String>,
    #[serde(rename = "startIndex")]
    pub start_index: Option<String>,
}

/// Resolved window: skip `start`, take `len`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub len: usize,
}

fn positive_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(default)
}

impl PageQuery {
    pub fn new(page: Option<&str>, records_per_page: Option<&str>, start_index: Option<&str>) -> Self {
        Self {
            page: page.map(str::to_string),
            records_per_page: records_per_page.map(str::to_string),
            start_index: start_index.map(str::to_string),
        }
    }

    /// Unparseable or non-positive values fall back to the defaults; a
    /// parseable, non-negative `startIndex` overrides the page offset
    pub fn window(&self) -> Window {
        let page = positive_or(self.page.as_deref(), DEFAULT_PAGE);
        let len = positive_or(self.records_per_page.as_deref(), DEFAULT_RECORDS_PER_PAGE);
        let computed = (page - 1).saturating_mul(len);
        let start = self
            .start_index
            .as_deref()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(computed);
        Window { start, len }
    }
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub total_count: i64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            total_count: 0,
            items: Vec::new(),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total_count: self.total_count,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

pub fn pipeline(window: Window) -> Pipeline {
    Pipeline::new()
        .matching(Filter::all())
        .group(
            Vec::<(&str, Expr)>::new(),
            [
                ("total_count", Accumulator::Count),
                ("data", Accumulator::Push(Expr::Root)),
            ],
        )
        .project([
            ("total_count", Expr::field("total_count")),
            (
                "items",
                Expr::Slice {
                    field: "data".to_string(),
                    start: window.start,
                    len: window.len,
                },
            ),
        ])
}

fn decode_page<T: Entity>(doc: Document) -> RepoResult<Page<T>> {
    let total_count = doc.get("total_count").and_then(Value::as_i64).unwrap_or(0);
    let items = match doc.get("items") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Object(fields) => decode(fields.clone()),
                other => Err(RepoError::Decode(format!(
                    "{} page item is not a document: {}",
                    T::LABEL,
                    other
                ))),
            })
            .collect::<RepoResult<Vec<T>>>()?,
        _ => Vec::new(),
    };
    Ok(Page { total_count, items })
}

impl<T: Entity> EntityRepository<T> {
    /// Paged listing; an empty collection gives an empty page
    pub async fn find_page(&self, query: &PageQuery) -> RepoResult<Page<T>> {
        let window = query.window();
        let docs = self
            .base()
            .aggregate(T::COLLECTION, &pipeline(window))
            .await?;
        tracing::debug!(collection = %T::COLLECTION, start = window.start, len = window.len, "Paged listing");
        match docs.into_iter().next() {
            Some(doc) => decode_page(doc),
            None => Ok(Page::empty()),
        }
    }
}
