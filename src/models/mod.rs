pub mod product;
pub mod coupon;
pub mod cart;

pub use product::*;
pub use coupon::*;
pub use cart::*;
