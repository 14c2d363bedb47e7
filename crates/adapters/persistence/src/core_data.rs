//! Core Data flavoured store.

use solid_app::ports::{Console, InvoicePersistence};
use solid_domain::invoice::Invoice;

/// Reports invoices as saved to a Core Data stack.
pub struct CoreDataPersistence<C> {
    console: C,
}

impl<C: Console> CoreDataPersistence<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> InvoicePersistence for CoreDataPersistence<C> {
    fn save(&self, invoice: &Invoice) {
        tracing::debug!(invoice_id = %invoice.id(), store = "core_data", "saving invoice");
        self.console
            .write_line(&format!("Invoice ID {} saved to Core Data", invoice.id()));
    }
}
