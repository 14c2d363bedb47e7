//! Persistable invoice — saves invoices through an injected store.

use solid_domain::invoice::Invoice;

use crate::ports::InvoicePersistence;

/// Forwards `save` to whatever [`InvoicePersistence`] it was built with.
///
/// Swapping the store is a construction-time decision; this type and its
/// callers stay unchanged.
pub struct PersistableInvoice<P> {
    persistence: P,
}

impl<P: InvoicePersistence> PersistableInvoice<P> {
    /// Create a wrapper backed by the given store.
    pub fn new(persistence: P) -> Self {
        Self { persistence }
    }

    #[tracing::instrument(skip_all, fields(invoice_id = %invoice.id()))]
    pub fn save(&self, invoice: &Invoice) {
        self.persistence.save(invoice);
    }
}
