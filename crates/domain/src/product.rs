//! Product — a priced line on an invoice.

use serde::{Deserialize, Serialize};

/// An immutable priced item.
///
/// Prices are expected to be non-negative but are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub price: f64,
}

impl Product {
    #[must_use]
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

impl From<f64> for Product {
    fn from(price: f64) -> Self {
        Self::new(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_price_as_given() {
        assert!((Product::new(9.99).price - 9.99).abs() < f64::EPSILON);
    }

    #[test]
    fn should_accept_negative_price_without_complaint() {
        let product = Product::from(-5.0);
        assert!(product.price < 0.0);
    }

    #[test]
    fn should_deserialize_from_json() {
        let product: Product = serde_json::from_str(r#"{"price": 24.99}"#).unwrap();
        assert_eq!(product, Product::new(24.99));
    }
}
