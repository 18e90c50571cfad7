//! Order summary pipeline
//!
//! Order lines are joined to their food, order and the order's table, then
//! grouped per `(order_id, table_id, table_number)` into one summary with
//! the payment due and the joined lines.
//!
//! `payment_due` is the sum of the food prices of the lines. Quantity is
//! carried through but not multiplied in.

use crate::db::store::{Collection, Filter};
use crate::pipeline::{Accumulator, Expr, Pipeline};

/// Stage sequence for the summaries of one order
pub fn pipeline(order_id: &str) -> Pipeline {
    Pipeline::new()
        .matching(Filter::eq("order_id", order_id))
        .lookup(Collection::Food, "food_id", "food_id", "food")
        .lookup(Collection::Order, "order_id", "order_id", "order")
        .lookup(Collection::Table, "order.table_id", "table_id", "table")
        .project([
            ("amount", Expr::field("food.price")),
            ("food_name", Expr::field("food.name")),
            ("food_image", Expr::field("food.food_image")),
            ("table_number", Expr::field("table.table_number")),
            ("table_id", Expr::field("table.table_id")),
            ("order_id", Expr::field("order.order_id")),
            ("price", Expr::field("food.price")),
            ("quantity", Expr::field("quantity")),
            // joined line before narrowing, kept for the breakdown
            ("order_item", Expr::Root),
        ])
        .group(
            [
                ("order_id", Expr::field("order_id")),
                ("table_id", Expr::field("table_id")),
                ("table_number", Expr::field("table_number")),
            ],
            [
                ("payment_due", Accumulator::Sum(Expr::field("amount"))),
                ("total_count", Accumulator::Count),
                ("order_items", Accumulator::Push(Expr::field("order_item"))),
            ],
        )
        .project([
            ("payment_due", Expr::field("payment_due")),
            ("total_count", Expr::field("total_count")),
            ("table_number", Expr::field("_id.table_number")),
            ("order_items", Expr::field("order_items")),
            ("table_id", Expr::field("_id.table_id")),
            ("order_id", Expr::field("_id.order_id")),
        ])
}
