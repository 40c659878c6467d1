//! Category On Top
//!
//! A percentage off the remaining price of every item in one category.

use crate::{
    cart::Cart,
    discounts::{DiscountRecord, clamp_discount},
};

/// A percentage bonus on top of earlier discounts for a single category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOnTop {
    code: String,
    category: String,
    percentage: f64,
    name: String,
}

impl CategoryOnTop {
    /// Create a new category campaign. `percentage` is in percent points.
    pub fn new(code: impl Into<String>, category: impl Into<String>, percentage: f64) -> Self {
        let category = category.into();
        let name = format!("CategoryOnTop({category},{percentage}%)");

        Self {
            code: code.into(),
            category,
            percentage,
            name,
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

    /// Return the targeted category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Return the percentage
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// The percentage of the matching items' base prices.
    pub fn estimated_value(&self, cart: &Cart) -> f64 {
        let matching: f64 = cart
            .iter()
            .filter(|item| item.category() == self.category)
            .map(|item| item.base_price())
            .sum();

        matching * (self.percentage / 100.0)
    }

    /// Apply the campaign to every matching item, returning the total discounted.
    ///
    /// Items outside the category get no record.
    pub fn apply(&self, cart: &mut Cart) -> f64 {
        let rate = self.percentage / 100.0;

        cart.iter_mut()
            .filter(|item| item.category() == self.category)
            .map(|item| {
                let remaining = item.net_price();
                let applied = clamp_discount(remaining * rate, remaining);

                item.push_discount(DiscountRecord::new(self.name.as_str(), applied));

                applied
            })
            .sum()
    }
}
