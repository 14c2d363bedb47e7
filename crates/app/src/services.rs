//! Application services.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod invoice_actions;
pub mod invoice_printer;
pub mod invoice_saver;
pub mod payment_initiator;
pub mod persistable_invoice;
pub mod user_fetcher;
