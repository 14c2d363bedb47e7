//! # solid-adapter-payments
//!
//! Payment providers implementing the [`PaymentMethod`] port.
//!
//! | Provider | Confirmation |
//! |----------|--------------|
//! | [`DebitCard`] | `Payment success for Debit Card <amount>` |
//! | [`ApplePay`] | `Payment success for Apple Pay <amount>` |
//! | [`Stripe`] | `Payment success for Stripe <amount>` |
//!
//! No money moves; each provider reports the confirmation on its console.
//!
//! ## Dependency rule
//!
//! Depends on `solid-app` (port traits) only.

use solid_app::ports::{Console, PaymentMethod};

macro_rules! define_provider {
    ($(#[doc = $doc:expr])* $name:ident, $label:literal) => {
        $(#[doc = $doc])*
        pub struct $name<C> {
            console: C,
        }

        impl<C: Console> $name<C> {
            /// Human-readable provider name used in confirmations.
            pub const LABEL: &'static str = $label;

            pub fn new(console: C) -> Self {
                Self { console }
            }
        }

        impl<C: Console> PaymentMethod for $name<C> {
            fn execute(&self, amount: f64) {
                tracing::info!(provider = Self::LABEL, amount, "payment executed");
                self.console
                    .write_line(&format!("Payment success for {} {}", Self::LABEL, amount));
            }
        }
    };
}

define_provider!(
    /// Pays from a debit card.
    DebitCard,
    "Debit Card"
);

define_provider!(
    /// Pays with Apple Pay.
    ApplePay,
    "Apple Pay"
);

define_provider!(
    /// Pays through Stripe.
    Stripe,
    "Stripe"
);
