//! Payment initiator — high-level entry point for taking a payment.

use crate::ports::PaymentMethod;

/// Takes payments through an injected [`PaymentMethod`].
///
/// Which provider actually moves the money is decided by whoever builds the
/// initiator.
pub struct PaymentInitiator<P> {
    method: P,
}

impl<P: PaymentMethod> PaymentInitiator<P> {
    /// Create an initiator that pays with `method`.
    pub fn new(method: P) -> Self {
        Self { method }
    }

    #[tracing::instrument(skip(self))]
    pub fn make_payment(&self, amount: f64) {
        self.method.execute(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct SpyPayment {
        calls: Mutex<Vec<f64>>,
    }

    impl PaymentMethod for SpyPayment {
        fn execute(&self, amount: f64) {
            self.calls.lock().unwrap().push(amount);
        }
    }

    #[test]
    fn should_execute_held_method_with_unchanged_amount() {
        let spy = SpyPayment::default();

        PaymentInitiator::new(&spy).make_payment(200.0);

        assert_eq!(*spy.calls.lock().unwrap(), vec![200.0]);
    }

    #[test]
    fn should_execute_once_per_payment() {
        let spy = SpyPayment::default();
        let initiator = PaymentInitiator::new(&spy);

        initiator.make_payment(1.25);
        initiator.make_payment(0.0);

        assert_eq!(*spy.calls.lock().unwrap(), vec![1.25, 0.0]);
    }

    #[test]
    fn should_accept_runtime_selected_method() {
        let spy = std::sync::Arc::new(SpyPayment::default());
        let method: Box<dyn PaymentMethod> = Box::new(spy.clone());

        PaymentInitiator::new(method).make_payment(42.5);

        assert_eq!(*spy.calls.lock().unwrap(), vec![42.5]);
    }
}
