//! The five demonstrations, each an independent unit.
//!
//! Every demo builds its own values and adapters; none reads another's
//! output. [`run_all`] invokes them in order.

pub mod extension;
pub mod inversion;
pub mod invoice;
pub mod segregation;
pub mod substitution;

use std::sync::Arc;

use solid_app::ports::Console;
use tokio::task::JoinHandle;

/// Write a section header.
pub(crate) fn header(console: &dyn Console, title: &str) {
    console.write_line(&format!("-------- {title} ----------"));
}

/// Run every demo in order.
///
/// The substitution demo runs on a spawned task. Its handle is returned so a
/// caller *may* wait for it; the runner itself never does. Must be called
/// from within a tokio runtime.
pub fn run_all(console: &Arc<dyn Console>) -> JoinHandle<()> {
    invoice::run(console);
    extension::run(console);
    let lookup = substitution::spawn(Arc::clone(console));
    segregation::run(console);
    inversion::run(console);
    lookup
}
