use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::product::Product;

/// An ordered collection of products. Duplicates by value are allowed and
/// insertion order is preserved.
///
/// Products are stored as independent copies: callers that want to keep a
/// product around after adding it clone it in, and mutating the original
/// afterwards never changes the stored copy.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ShoppingCart {
    products: Vec<Product>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of the current contents, recomputed on every call. An empty
    /// cart totals 0.
    pub fn total_price(&self) -> f64 {
        self.products.iter().map(|product| product.price).sum()
    }

    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Remove the first product equal to `product` (name and price both
    /// match), keeping the relative order of the rest. Removing a product
    /// that is not in the cart is a no-op.
    pub fn remove(&mut self, product: &Product) {
        if let Some(index) = self.products.iter().position(|p| p == product) {
            self.products.remove(index);
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }
}

// Cart snapshot DTO for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct CartSummary {
    pub items: Vec<Product>,
    pub item_count: usize,
    pub total_price: f64,
    pub generated_at: DateTime<Utc>,
}
