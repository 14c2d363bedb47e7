//! Dependency inversion: the initiator is handed a payment method.

use std::sync::Arc;

use solid_adapter_payments::ApplePay;
use solid_app::ports::Console;
use solid_app::services::payment_initiator::PaymentInitiator;

pub const TITLE: &str = "Dependency Inversion Principle (DIP)";

pub fn run(console: &Arc<dyn Console>) {
    super::header(console.as_ref(), TITLE);

    let apple_pay = PaymentInitiator::new(ApplePay::new(Arc::clone(console)));
    apple_pay.make_payment(200.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_adapter_console::MemoryConsole;

    #[test]
    fn should_pay_two_hundred_with_apple_pay() {
        let memory = MemoryConsole::new();
        let console: Arc<dyn Console> = Arc::new(memory.clone());

        run(&console);

        assert_eq!(
            memory.lines(),
            vec![
                "-------- Dependency Inversion Principle (DIP) ----------",
                "Payment success for Apple Pay 200",
            ]
        );
    }
}
