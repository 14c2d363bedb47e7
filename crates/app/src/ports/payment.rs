//! Payment port — a way of moving money.

use std::sync::Arc;

/// Executes a payment for a given amount.
pub trait PaymentMethod {
    /// Charge `amount` and report the outcome.
    fn execute(&self, amount: f64);
}

impl<T: PaymentMethod + ?Sized> PaymentMethod for Box<T> {
    fn execute(&self, amount: f64) {
        (**self).execute(amount);
    }
}

impl<T: PaymentMethod + ?Sized> PaymentMethod for Arc<T> {
    fn execute(&self, amount: f64) {
        (**self).execute(amount);
    }
}

impl<T: PaymentMethod + ?Sized> PaymentMethod for &T {
    fn execute(&self, amount: f64) {
        (**self).execute(amount);
    }
}
