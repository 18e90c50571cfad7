//! Invoice use cases

use crate::db::repository::{BaseRepository, InvoiceRepository, OrderItemRepository, OrderRepository};
use crate::db::store::{Collection, UpdateAck};
use crate::invoices::view;
use crate::update::PartialUpdate;
use chrono::Duration;
use shared::error::{AppError, AppResult};
use shared::models::{Invoice, InvoiceCreate, InvoiceUpdate, InvoiceView};
use shared::util;
use validator::Validate;

/// Invoices fall due one day after they are issued
const PAYMENT_TERM_DAYS: i64 = 1;

#[derive(Clone)]
pub struct InvoiceService {
    invoices: InvoiceRepository,
    orders: OrderRepository,
    items: OrderItemRepository,
}

impl InvoiceService {
    pub fn new(base: BaseRepository) -> Self {
        Self {
            invoices: InvoiceRepository::new(base.clone()),
            orders: OrderRepository::new(base.clone()),
            items: OrderItemRepository::new(base),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Invoice>> {
        Ok(self.invoices.find_all().await?)
    }

    pub async fn get(&self, invoice_id: &str) -> AppResult<Invoice> {
        Ok(self.invoices.get(invoice_id).await?)
    }

    /// The invoice joined with the summary of its order
    pub async fn get_view(&self, invoice_id: &str) -> AppResult<InvoiceView> {
        let invoice = self.invoices.get(invoice_id).await?;
        let summaries = self.items.summaries_by_order(&invoice.order_id).await?;
        view::project(invoice, summaries)
    }

    /// Issue an invoice for an existing order
    ///
    /// Status defaults to `PENDING`; the due date is one day from now.
    pub async fn create(&self, payload: InvoiceCreate) -> AppResult<Invoice> {
        payload.validate()?;
        if !self.orders.exists(&payload.order_id).await? {
            return Err(AppError::reference_not_found("order_id", payload.order_id));
        }

        let now = util::now();
        let invoice = Invoice {
            invoice_id: util::new_id(),
            order_id: payload.order_id,
            payment_method: payload.payment_method,
            payment_status: payload.payment_status.unwrap_or_default(),
            payment_due_date: now + Duration::days(PAYMENT_TERM_DAYS),
            created_at: now,
            updated_at: now,
        };
        self.invoices.create(&invoice).await?;
        tracing::info!(invoice_id = %invoice.invoice_id, order_id = %invoice.order_id, "Invoice created");
        Ok(invoice)
    }

    pub async fn update(&self, invoice_id: &str, patch: InvoiceUpdate) -> AppResult<UpdateAck> {
        PartialUpdate::new()
            .field("payment_method", patch.payment_method)
            .field("payment_status", patch.payment_status)
            .apply(self.invoices.base(), Collection::Invoice, invoice_id)
            .await
    }
}
