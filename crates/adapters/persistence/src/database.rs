//! Database flavoured store.

use solid_app::ports::{Console, InvoicePersistence};
use solid_domain::invoice::Invoice;

/// Reports invoices as saved to a relational database.
///
/// The row that would be written is rendered as JSON and emitted at `debug`
/// level; nothing leaves the process.
pub struct DatabasePersistence<C> {
    console: C,
}

impl<C: Console> DatabasePersistence<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// The JSON row this store would insert for `invoice`.
    #[must_use]
    pub fn record(invoice: &Invoice) -> serde_json::Value {
        serde_json::json!({
            "id": invoice.id(),
            "products": invoice.products(),
            "discount_percentage": invoice.discount_percentage(),
            "total": invoice.total(),
        })
    }
}

impl<C: Console> InvoicePersistence for DatabasePersistence<C> {
    fn save(&self, invoice: &Invoice) {
        tracing::debug!(
            invoice_id = %invoice.id(),
            store = "database",
            record = %Self::record(invoice),
            "saving invoice"
        );
        self.console
            .write_line(&format!("Invoice ID for database {}", invoice.id()));
    }
}
