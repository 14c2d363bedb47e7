//! # solid-app
//!
//! Application layer — **port definitions** (traits) and single-purpose services.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Console` — line-oriented user output
//!   - `InvoicePersistence` — store an invoice somewhere
//!   - `UserService` — fetch a user from a remote API
//!   - `SingleTap` / `DoubleTap` / `LongTap` — narrow gesture capabilities
//!   - `PaymentMethod` — execute a payment
//! - Provide **services** that depend only on those ports:
//!   - `InvoicePrinter`, `InvoiceSaver` and the `InvoiceActions` extension
//!   - `PersistableInvoice` — forwards to whichever store it was given
//!   - `UserFetcher` — calls a `UserService` and contains its failures
//!   - `PaymentInitiator` — forwards to whichever payment method it was given
//!
//! ## Dependency rule
//! Depends on `solid-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
