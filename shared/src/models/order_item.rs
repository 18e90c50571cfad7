//! Order line Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// One line of an order: a food at a unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_item_id: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub food_id: String,
    #[serde(default)]
    pub quantity: i32,
    /// Unit price in currency unit, 2 dp
    #[serde(default, with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A line inside an [`OrderItemPack`]; the order id is assigned on creation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemDraft {
    #[validate(length(min = 1))]
    pub food_id: String,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

/// Batch of lines that opens a fresh order, optionally at a table
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemPack {
    pub table_id: Option<String>,
    #[validate(length(min = 1), nested)]
    pub order_items: Vec<OrderItemDraft>,
}

/// Update order line payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderItemUpdate {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub unit_price: Option<Decimal>,
    pub quantity: Option<i32>,
    pub food_id: Option<String>,
}

/// Per-order aggregate of joined order lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: Option<String>,
    pub table_id: Option<String>,
    pub table_number: Option<i32>,
    /// Σ unit amounts of the lines (quantity is not applied)
    #[serde(with = "rust_decimal::serde::float")]
    pub payment_due: Decimal,
    pub total_count: i64,
    /// Joined per-line records, in line order
    pub order_items: Vec<Value>,
}
