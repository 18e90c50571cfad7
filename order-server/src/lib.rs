//! Order desk server core
//!
//! Entities live in a document store (embedded SurrealDB). Use cases are
//! exposed as services on [`ServerState`]; the read side joins order lines
//! with food, order and table documents through an in-process aggregation
//! pipeline, the write side applies sparse partial updates.

pub mod core;
pub mod db;
pub mod invoices;
pub mod money;
pub mod orders;
pub mod pagination;
pub mod pipeline;
pub mod services;
pub mod update;
pub mod utils;

// Re-exports
pub use core::{Config, ServerState};
pub use shared::error::{AppError, AppResult, ErrorCode};
