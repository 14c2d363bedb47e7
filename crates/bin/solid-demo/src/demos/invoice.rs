//! Single responsibility: the invoice computes, collaborators print and save.

use std::sync::Arc;

use solid_app::ports::Console;
use solid_app::services::invoice_actions::InvoiceActions;
use solid_domain::invoice::Invoice;
use solid_domain::product::Product;

pub const TITLE: &str = "Single responsibility principle";

/// The three-product invoice used by the demo.
#[must_use]
pub fn sample_invoice() -> Invoice {
    Invoice::new([99.99, 9.99, 24.99].map(Product::new))
}

pub fn run(console: &Arc<dyn Console>) {
    super::header(console.as_ref(), TITLE);

    let invoice = sample_invoice();
    invoice.print(console.as_ref());
    invoice.save(console.as_ref());
}
