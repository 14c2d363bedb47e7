//! `print` / `save` on [`Invoice`], delegated to dedicated collaborators.
//!
//! The domain type stays free of output and storage concerns; this extension
//! builds an [`InvoicePrinter`] or [`InvoiceSaver`] from the invoice on each call.

use solid_domain::invoice::Invoice;

use crate::ports::Console;
use crate::services::invoice_printer::InvoicePrinter;
use crate::services::invoice_saver::InvoiceSaver;

/// Convenience actions on an invoice.
pub trait InvoiceActions {
    /// Print the invoice summary.
    fn print<C: Console + ?Sized>(&self, console: &C);

    /// Save the invoice.
    fn save<C: Console + ?Sized>(&self, console: &C);
}

impl InvoiceActions for Invoice {
    fn print<C: Console + ?Sized>(&self, console: &C) {
        InvoicePrinter::new(self).print(console);
    }

    fn save<C: Console + ?Sized>(&self, console: &C) {
        InvoiceSaver::new(self).save(console);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingConsole;
    use solid_domain::product::Product;

    #[test]
    fn should_print_through_invoice_printer() {
        let invoice = Invoice::new([Product::new(20.0)]);
        let console = RecordingConsole::default();

        invoice.print(&console);

        assert_eq!(console.lines(), InvoicePrinter::new(&invoice).render());
    }

    #[test]
    fn should_save_through_invoice_saver() {
        let invoice = Invoice::new([Product::new(20.0)]);
        let console = RecordingConsole::default();

        invoice.save(&console);

        assert_eq!(console.lines(), vec!["Save to data base"]);
    }

    #[test]
    fn should_print_then_save_in_call_order() {
        let invoice = Invoice::new([Product::new(3.0)]);
        let console = RecordingConsole::default();

        invoice.print(&console);
        invoice.save(&console);

        let lines = console.lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[5], "Save to data base");
    }
}
