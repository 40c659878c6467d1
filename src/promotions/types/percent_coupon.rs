//! Percent Coupon
//!
//! A percentage of the cart's original total, spread across items by base price.

use crate::{allocation::distribute, cart::Cart};

/// A coupon worth a percentage of the cart's base price.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentCoupon {
    code: String,
    percentage: f64,
    name: String,
}

impl PercentCoupon {
    /// Create a new percentage coupon. `percentage` is in percent points (10 = 10%).
    pub fn new(code: impl Into<String>, percentage: f64) -> Self {
        Self {
            code: code.into(),
            percentage,
            name: format!("PercentCoupon({percentage}%)"),
        }
    }

    /// Return the campaign code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Return the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the percentage
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Discount pool for a cart with the given base price.
    pub fn pool(&self, total_base_price: f64) -> f64 {
        total_base_price * (self.percentage / 100.0)
    }

    /// Same as the pool: the coupon is always sized against the base price.
    pub fn estimated_value(&self, total_base_price: f64) -> f64 {
        self.pool(total_base_price)
    }

    /// Apply the coupon, returning the amount actually allocated.
    pub fn apply(&self, cart: &mut Cart, total_base_price: f64) -> f64 {
        distribute(cart, &self.name, self.pool(total_base_price), total_base_price)
    }
}
