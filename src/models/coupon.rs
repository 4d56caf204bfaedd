use serde::{Deserialize, Serialize};

/// A named percentage discount. The name is descriptive only; nothing
/// keys off it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub name: String,
    pub discount: f64,
}

impl Coupon {
    pub fn new(name: impl Into<String>, discount: f64) -> Self {
        Self {
            name: name.into(),
            discount,
        }
    }

    // Expected range is [0, 100]; values outside it are still applied as-is.
    pub fn is_in_range(&self) -> bool {
        (0.0..=100.0).contains(&self.discount)
    }
}

impl std::fmt::Display for Coupon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (-{}%)", self.name, self.discount)
    }
}
