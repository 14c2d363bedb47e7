//! Invoice saver — the single place that knows an invoice must be stored.

use solid_domain::invoice::Invoice;

use crate::ports::Console;

/// Persists a single invoice. Knows nothing about formatting.
///
/// Storage is simulated: saving reports a placeholder line.
pub struct InvoiceSaver<'a> {
    invoice: &'a Invoice,
}

impl<'a> InvoiceSaver<'a> {
    #[must_use]
    pub fn new(invoice: &'a Invoice) -> Self {
        Self { invoice }
    }

    #[tracing::instrument(skip_all, fields(invoice_id = %self.invoice.id()))]
    pub fn save<C: Console + ?Sized>(&self, console: &C) {
        tracing::debug!("saving invoice");
        console.write_line("Save to data base");
    }
}
