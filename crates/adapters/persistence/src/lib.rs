//! # solid-adapter-persistence
//!
//! Placeholder implementations of the
//! [`InvoicePersistence`](solid_app::ports::InvoicePersistence) port.
//!
//! | Store | Reports |
//! |-------|---------|
//! | [`CoreDataPersistence`] | `Invoice ID <id> saved to Core Data` |
//! | [`DatabasePersistence`] | `Invoice ID for database <id>` |
//!
//! Neither store touches disk. They exist so callers can be shown swapping
//! one for the other without change.
//!
//! ## Dependency rule
//!
//! Depends on `solid-app` (port traits) and `solid-domain` only.

mod core_data;
mod database;

pub use core_data::CoreDataPersistence;
pub use database::DatabasePersistence;
