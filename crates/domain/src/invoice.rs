//! Invoice — an ordered list of products with a discount and a derived total.
//!
//! The invoice only knows how to compute its own numbers. Printing and
//! persistence live in separate collaborators in the `app` crate.

use serde::Serialize;

use crate::id::InvoiceId;
use crate::product::Product;

/// A bill for a fixed set of products.
///
/// The identifier is generated once at construction and never changes.
/// `total` is always recomputed from the current products and discount.
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    id: InvoiceId,
    products: Vec<Product>,
    discount_percentage: f64,
}

impl Invoice {
    /// Create an invoice with a fresh identifier and no discount.
    #[must_use]
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            id: InvoiceId::new(),
            products: products.into_iter().collect(),
            discount_percentage: 0.0,
        }
    }

    /// Return the same invoice with the given discount applied.
    #[must_use]
    pub fn with_discount_percentage(mut self, discount_percentage: f64) -> Self {
        self.discount_percentage = discount_percentage;
        self
    }

    #[must_use]
    pub fn id(&self) -> InvoiceId {
        self.id
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn discount_percentage(&self) -> f64 {
        self.discount_percentage
    }

    /// Change the discount. Values outside `0..=100` are accepted as is.
    pub fn set_discount_percentage(&mut self, discount_percentage: f64) {
        self.discount_percentage = discount_percentage;
    }

    /// Sum of the product prices.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }

    /// Subtotal minus the discount amount.
    #[must_use]
    pub fn total(&self) -> f64 {
        let subtotal = self.subtotal();
        subtotal - subtotal * (self.discount_percentage / 100.0)
    }
}
