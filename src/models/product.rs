use serde::{Deserialize, Serialize};

use crate::models::coupon::Coupon;

/// A named item with a mutable price. Two products count as the same
/// product only when both name and price match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Discount the price in place: `price *= 1 - discount / 100`.
    ///
    /// The discount is not range-checked: a discount above 100 leaves a
    /// negative price, a negative discount raises the price. Both follow
    /// the same formula.
    pub fn apply(&mut self, coupon: &Coupon) {
        let multiplier = 1.0 - coupon.discount / 100.0;
        self.price *= multiplier;
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.2})", self.name, self.price)
    }
}
