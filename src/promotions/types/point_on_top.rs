//! Point On Top
//!
//! Loyalty points redeemed against the remaining price, capped at a share of the
//! cart's original total.

use crate::{allocation::distribute_by_net, cart::Cart, discounts::clamp_discount};

/// Maximum share of the base price, in percent, that all discounts combined may
/// reach before points stop applying.
pub const POINT_CAP_PERCENT: f64 = 20.0;

/// A points redemption applied on top of earlier discounts.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOnTop {
    code: String,
    points: f64,
    name: String,
}

impl PointOnTop {
    /// Create a new points campaign. One point is worth one unit of currency.
    pub fn new(code: impl Into<String>, points: f64) -> Self {
        Self {
            code: code.into(),
            points,
            name: format!("PointOnTop({points} points)"),
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

    /// Return the number of points
    pub fn points(&self) -> f64 {
        self.points
    }

    /// Upper bound on all discounts for a cart with the given base price.
    pub fn cap_value(total_base_price: f64) -> f64 {
        total_base_price * (POINT_CAP_PERCENT / 100.0)
    }

    /// Points usable once `already_discounted` has been taken off the cart.
    pub fn pool(&self, total_base_price: f64, already_discounted: f64) -> f64 {
        let remaining_cap = Self::cap_value(total_base_price) - already_discounted;

        clamp_discount(self.points, remaining_cap)
    }

    /// Points usable against an undiscounted cart.
    pub fn estimated_value(&self, total_base_price: f64) -> f64 {
        self.pool(total_base_price, 0.0)
    }

    /// Apply the points, returning the amount actually allocated.
    pub fn apply(&self, cart: &mut Cart, total_base_price: f64) -> f64 {
        let pool = self.pool(total_base_price, cart.total_discount());

        distribute_by_net(cart, &self.name, pool)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{allocation::distribute, items::CartItem};

    use super::*;

    #[test]
    fn pool_is_capped_at_twenty_percent() {
        let campaign = PointOnTop::new("PT", 1000.0);

        assert!((campaign.pool(500.0, 0.0) - 100.0).abs() < 1e-9);
        assert!((campaign.pool(500.0, 60.0) - 40.0).abs() < 1e-9);
        assert!(campaign.pool(500.0, 150.0).abs() < f64::EPSILON);
        assert_eq!(campaign.name(), "PointOnTop(1000 points)");
    }

    #[test]
    fn apply_redeems_points_under_cap() -> TestResult {
        let mut cart = Cart::with_items([
            CartItem::new("T-Shirt", 350.0, 1, "Clothing"),
            CartItem::new("Hat", 250.0, 1, "Accessories"),
            CartItem::new("Belt", 230.0, 1, "Accessories"),
        ])?;
        let total = cart.total_base_price();

        let used = PointOnTop::new("PT", 68.0).apply(&mut cart, total);

        assert!((used - 68.0).abs() < 1e-9);
        assert!((cart.total_net_price() - 762.0).abs() < 1e-9);

        Ok(())
    }

    #[test]
    fn apply_is_noop_once_cap_is_exhausted() -> TestResult {
        let mut cart = Cart::with_items([
            CartItem::new("A", 300.0, 1, "X"),
            CartItem::new("B", 200.0, 1, "Y"),
        ])?;
        let total = cart.total_base_price();

        distribute(&mut cart, "coupon", 100.0, total);

        let used = PointOnTop::new("PT", 50.0).apply(&mut cart, total);

        assert!(used.abs() < f64::EPSILON);
        assert!(cart.iter().all(|item| item.discount_records().len() == 1));

        Ok(())
    }
}
