//! Fixed Coupon
//!
//! A flat amount taken off the whole cart, spread across items by base price.

use crate::{allocation::distribute, cart::Cart};

/// A coupon worth a fixed amount.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedCoupon {
    code: String,
    amount: f64,
    name: String,
}

impl FixedCoupon {
    /// Create a new fixed coupon.
    pub fn new(code: impl Into<String>, amount: f64) -> Self {
        Self {
            code: code.into(),
            amount,
            name: format!("FixedCoupon({amount} Baht)"),
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

    /// Return the coupon amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The flat coupon amount.
    pub fn estimated_value(&self) -> f64 {
        self.amount
    }

    /// Apply the coupon, returning the amount actually allocated.
    pub fn apply(&self, cart: &mut Cart, total_base_price: f64) -> f64 {
        distribute(cart, &self.name, self.amount, total_base_price)
    }
}
