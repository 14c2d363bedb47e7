//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the service layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod console;
pub mod gesture;
pub mod payment;
pub mod persistence;
pub mod user_service;

pub use console::Console;
pub use gesture::{DoubleTap, LongTap, SingleTap};
pub use payment::PaymentMethod;
pub use persistence::InvoicePersistence;
pub use user_service::UserService;
