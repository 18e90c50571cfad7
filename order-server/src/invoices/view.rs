//! Invoice view projector

use shared::error::{AppError, AppResult};
use shared::models::{Invoice, InvoiceView, OrderSummary};

/// Shown when an invoice has no payment method yet
pub const NO_PAYMENT_METHOD: &str = "null";

/// Combine an invoice with the summaries of its order
///
/// Only the first summary is used; an order without lines has no summary
/// and yields `NotFound`.
pub fn project(invoice: Invoice, summaries: Vec<OrderSummary>) -> AppResult<InvoiceView> {
    let Some(summary) = summaries.into_iter().next() else {
        return Err(
            AppError::not_found(format!("Order lines for order {}", invoice.order_id))
                .with_detail("invoice_id", invoice.invoice_id),
        );
    };

    Ok(InvoiceView {
        payment_method: invoice
            .payment_method
            .map(|m| m.to_string())
            .unwrap_or_else(|| NO_PAYMENT_METHOD.to_string()),
        invoice_id: invoice.invoice_id,
        order_id: invoice.order_id,
        payment_status: invoice.payment_status,
        payment_due_date: invoice.payment_due_date,
        payment_due: summary.payment_due,
        table_number: summary.table_number,
        order_details: summary.order_items,
    })
}
