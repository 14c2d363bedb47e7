//! Invoice printer — renders an invoice summary for humans.

use solid_domain::invoice::Invoice;

use crate::ports::Console;

const RULE: &str = "------------------------";

/// Formats a single invoice. Knows nothing about where the invoice is stored.
pub struct InvoicePrinter<'a> {
    invoice: &'a Invoice,
}

impl<'a> InvoicePrinter<'a> {
    #[must_use]
    pub fn new(invoice: &'a Invoice) -> Self {
        Self { invoice }
    }

    /// Lines making up the printed block, rules included.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        vec![
            RULE.to_string(),
            format!("Invoice ID : {}", self.invoice.id()),
            format!("Total Cost ${:.2}", self.invoice.total()),
            format!("Discounts: {}", self.invoice.discount_percentage()),
            RULE.to_string(),
        ]
    }

    /// Write the rendered block to `console`.
    pub fn print<C: Console + ?Sized>(&self, console: &C) {
        for line in self.render() {
            console.write_line(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingConsole;
    use solid_domain::product::Product;

    #[test]
    fn should_render_id_total_and_discount_between_rules() {
        let invoice =
            Invoice::new([Product::new(100.0), Product::new(50.0)]).with_discount_percentage(10.0);
        let lines = InvoicePrinter::new(&invoice).render();

        assert_eq!(
            lines,
            vec![
                RULE.to_string(),
                format!("Invoice ID : {}", invoice.id()),
                "Total Cost $135.00".to_string(),
                "Discounts: 10".to_string(),
                RULE.to_string(),
            ]
        );
    }

    #[test]
    fn should_round_total_to_cents() {
        let invoice = Invoice::new([99.99, 9.99, 24.99].map(Product::new));
        let lines = InvoicePrinter::new(&invoice).render();
        assert_eq!(lines[2], "Total Cost $134.97");
    }

    #[test]
    fn should_write_every_rendered_line_to_console() {
        let invoice = Invoice::new([Product::new(1.0)]);
        let console = RecordingConsole::default();

        let printer = InvoicePrinter::new(&invoice);
        printer.print(&console);

        assert_eq!(console.lines(), printer.render());
    }
}
