//! Order aggregation

pub mod summary;
