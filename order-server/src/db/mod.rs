//! Database Module
//!
//! Document store port, its SurrealDB implementation and the typed
//! repositories on top.

pub mod repository;
pub mod store;
pub mod surreal;

pub use store::{Collection, Document, DocumentStore, FieldSet, Filter, UpdateAck};
pub use surreal::SurrealStore;
