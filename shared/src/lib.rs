//! Shared types for the order desk
//!
//! Entity models, create/update payloads, the unified error system and
//! small helpers used by the server crate and by any transport in front of it.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
