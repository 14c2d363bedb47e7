//! Persistence port — somewhere an invoice can be saved.

use std::sync::Arc;

use solid_domain::invoice::Invoice;

/// Stores invoices.
///
/// Implementations live in adapter crates. Callers never name a concrete
/// store, so a new backend is added without touching them.
pub trait InvoicePersistence {
    /// Save the invoice.
    fn save(&self, invoice: &Invoice);
}

impl<T: InvoicePersistence + ?Sized> InvoicePersistence for Box<T> {
    fn save(&self, invoice: &Invoice) {
        (**self).save(invoice);
    }
}

impl<T: InvoicePersistence + ?Sized> InvoicePersistence for Arc<T> {
    fn save(&self, invoice: &Invoice) {
        (**self).save(invoice);
    }
}

impl<T: InvoicePersistence + ?Sized> InvoicePersistence for &T {
    fn save(&self, invoice: &Invoice) {
        (**self).save(invoice);
    }
}
