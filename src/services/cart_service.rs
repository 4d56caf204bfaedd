use chrono::Utc;
use tracing::{debug, info, warn};

use crate::models::cart::{CartSummary, ShoppingCart};
use crate::models::coupon::Coupon;
use crate::models::product::Product;

/// Session-scoped cart operations with logging around the domain model.
///
/// Every operation is total; nothing here returns an error.
pub struct CartService {
    cart: ShoppingCart,
}

impl CartService {
    pub fn new() -> Self {
        Self {
            cart: ShoppingCart::new(),
        }
    }

    /// Apply a coupon to a product, typically before it goes into the cart.
    ///
    /// Out-of-range discounts are logged but still applied.
    pub fn apply_coupon(&self, product: &mut Product, coupon: &Coupon) {
        if !coupon.is_in_range() {
            warn!(
                "Coupon '{}' has discount {}% outside [0, 100]; applying anyway",
                coupon.name, coupon.discount
            );
        }

        let before = product.price;
        product.apply(coupon);
        info!(
            "Applied coupon '{}' to '{}': {} -> {}",
            coupon.name, product.name, before, product.price
        );
    }

    pub fn add(&mut self, product: Product) {
        info!("Adding '{}' at {} to the cart", product.name, product.price);
        self.cart.add(product);
        debug!("Cart now holds {} item(s)", self.cart.len());
    }

    /// Remove the first matching product. Returns whether anything was
    /// removed so the caller can report it; the cart itself treats a miss
    /// as a silent no-op.
    pub fn remove(&mut self, product: &Product) -> bool {
        let before = self.cart.len();
        self.cart.remove(product);
        let removed = self.cart.len() < before;

        if removed {
            info!(
                "Removed '{}' at {} from the cart",
                product.name, product.price
            );
        } else {
            debug!(
                "No product matching '{}' at {} in the cart",
                product.name, product.price
            );
        }

        removed
    }

    pub fn total(&self) -> f64 {
        self.cart.total_price()
    }

    pub fn items(&self) -> &[Product] {
        self.cart.products()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Empty the cart, returning how many items were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.cart.len();
        self.cart.clear();
        info!("Cleared {} item(s) from the cart", dropped);
        dropped
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.cart.products().to_vec(),
            item_count: self.cart.len(),
            total_price: self.cart.total_price(),
            generated_at: Utc::now(),
        }
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}
