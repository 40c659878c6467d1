//! Discounts

/// Tolerance used when comparing monetary amounts.
pub const PRICE_EPSILON: f64 = 0.01;

/// A single discount contribution from one campaign to one cart item.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountRecord {
    source: String,
    amount: f64,
}

impl DiscountRecord {
    /// Create a new discount record.
    pub fn new(source: impl Into<String>, amount: f64) -> Self {
        Self {
            source: source.into(),
            amount,
        }
    }

    /// Display name of the campaign that produced this discount.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Amount discounted.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Returns true if two prices are equal within [`PRICE_EPSILON`].
pub fn prices_match(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < PRICE_EPSILON
}

/// Clamp a proposed discount to `[0, cap]`.
///
/// The cap is applied first, so a negative cap yields a zero discount.
pub(crate) fn clamp_discount(proposed: f64, cap: f64) -> f64 {
    proposed.min(cap).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accessors_return_constructor_values() {
        let record = DiscountRecord::new("FixedCoupon(20 Baht)", 20.0);

        assert_eq!(record.source(), "FixedCoupon(20 Baht)");
        assert!((record.amount() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn prices_match_within_epsilon() {
        assert!(prices_match(180.004, 180.0));
        assert!(prices_match(1003.076_923, 1003.08));
        assert!(!prices_match(180.02, 180.0));
    }

    #[test]
    fn clamp_discount_caps_at_remaining_price() {
        assert!((clamp_discount(150.0, 100.0) - 100.0).abs() < f64::EPSILON);
        assert!((clamp_discount(40.0, 100.0) - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn clamp_discount_never_goes_negative() {
        assert!(clamp_discount(-5.0, 100.0).abs() < f64::EPSILON);
        assert!(clamp_discount(10.0, -3.0).abs() < f64::EPSILON);
    }
}
