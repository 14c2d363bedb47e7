//! Open/closed: behaviour is added around existing types, never inside them.

use std::sync::Arc;

use solid_adapter_persistence::{CoreDataPersistence, DatabasePersistence};
use solid_app::ports::Console;
use solid_app::services::persistable_invoice::PersistableInvoice;
use solid_domain::invoice::Invoice;
use solid_domain::numeric::Squared;
use solid_domain::product::Product;

pub const TITLE: &str = "Open/Closed Principle";

pub fn run(console: &Arc<dyn Console>) {
    super::header(console.as_ref(), TITLE);

    let num: i32 = 2;
    console.write_line(&format!("{num} squared is {}", num.squared()));

    let invoice = Invoice::new([Product::new(49.5), Product::new(15.0)]);

    let database = PersistableInvoice::new(DatabasePersistence::new(Arc::clone(console)));
    database.save(&invoice);

    let core_data = PersistableInvoice::new(CoreDataPersistence::new(Arc::clone(console)));
    core_data.save(&invoice);
}
