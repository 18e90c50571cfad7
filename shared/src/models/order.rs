//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order entity, optionally seated at a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    #[serde(default)]
    pub order_date: DateTime<Utc>,
    pub table_id: Option<String>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    /// Defaults to the creation instant
    pub order_date: Option<DateTime<Utc>>,
    #[validate(length(min = 1))]
    pub table_id: Option<String>,
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub order_date: Option<DateTime<Utc>>,
    pub table_id: Option<String>,
}
