//! Seasonal Campaign
//!
//! "Every X spent, get Y off": a bulk discount counted in whole multiples of the
//! cart's base price.

use crate::{allocation::distribute, cart::Cart};

/// A seasonal bulk discount.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalCampaign {
    code: String,
    every_amount: f64,
    discount: f64,
    name: String,
}

impl SeasonalCampaign {
    /// Create a new seasonal campaign.
    pub fn new(code: impl Into<String>, every_amount: f64, discount: f64) -> Self {
        Self {
            code: code.into(),
            every_amount,
            discount,
            name: format!("Seasonal(Every {every_amount} Get {discount})"),
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

    /// Spend threshold for each discount step
    pub fn every_amount(&self) -> f64 {
        self.every_amount
    }

    /// Discount granted per step
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Discount pool for a cart with the given base price.
    pub fn pool(&self, total_base_price: f64) -> f64 {
        whole_multiples(total_base_price, self.every_amount) * self.discount
    }

    /// Same as the pool.
    pub fn estimated_value(&self, total_base_price: f64) -> f64 {
        self.pool(total_base_price)
    }

    /// Apply the campaign, returning the amount actually allocated.
    pub fn apply(&self, cart: &mut Cart, total_base_price: f64) -> f64 {
        distribute(cart, &self.name, self.pool(total_base_price), total_base_price)
    }
}

/// Floor of `total / step`.
///
/// Uses the exact floating-point remainder so that, for example, `1.0` holds
/// nine whole steps of `0.1` rather than the ten a rounded quotient suggests.
/// A negative step floors towards negative infinity, so the count is negative.
fn whole_multiples(total: f64, step: f64) -> f64 {
    if step == 0.0 {
        return 0.0;
    }

    let remainder = total % step;
    let steps = ((total - remainder) / step).round();

    if remainder != 0.0 && (remainder < 0.0) != (step < 0.0) {
        steps - 1.0
    } else {
        steps
    }
}
