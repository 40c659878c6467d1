//! Campaign Types

mod category_on_top;
mod fixed_coupon;
mod percent_coupon;
mod point_on_top;
mod seasonal;

pub use category_on_top::*;
pub use fixed_coupon::*;
pub use percent_coupon::*;
pub use point_on_top::*;
pub use seasonal::*;
