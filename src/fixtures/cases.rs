//! Pricing Case Fixtures

use serde::Deserialize;

use crate::{
    cart::Cart,
    items::CartItem,
    processor::{DiscountProcessor, ProcessorError},
    promotions::definitions::CampaignDefinition,
    receipt::{Receipt, Verdict},
};

use super::FixtureError;

/// Label used for cases without a `test_name`.
pub const UNNAMED_CASE: &str = "N/A";

/// One cart, its promotions and the expected outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingCase {
    /// Case name
    #[serde(default)]
    pub test_name: Option<String>,

    /// Cart line items, in cart order
    #[serde(default)]
    pub products: Vec<ProductFixture>,

    /// Campaign definitions, in input order
    #[serde(default)]
    pub promos: Vec<CampaignDefinition>,

    /// Expected final price, compared within the price tolerance
    #[serde(default)]
    pub final_expected_cost: Option<f64>,

    /// Expected classification error message, for cases that must be rejected
    #[serde(default)]
    pub expected_error: Option<String>,
}

impl PricingCase {
    /// Case name, or [`UNNAMED_CASE`].
    pub fn name(&self) -> &str {
        self.test_name.as_deref().unwrap_or(UNNAMED_CASE)
    }

    /// Build the cart for this case.
    ///
    /// # Errors
    ///
    /// Returns a `FixtureError::Cart` if any product has a zero quantity or an
    /// invalid cost.
    pub fn cart(&self) -> Result<Cart, FixtureError> {
        let items: Vec<CartItem> = self.products.iter().map(CartItem::from).collect();

        Ok(Cart::with_items(items)?)
    }

    /// Price the case and judge the outcome against its expectations.
    ///
    /// A case with `expected_error` passes only when classification fails with
    /// exactly that message.
    ///
    /// # Errors
    ///
    /// Returns a `FixtureError::Cart` if the cart cannot be built.
    pub fn evaluate(&self, processor: &DiscountProcessor) -> Result<CaseOutcome, FixtureError> {
        let cart = self.cart()?;

        let outcome = match processor.calculate_final_price(cart, &self.promos) {
            Ok(priced) => {
                let receipt = Receipt::from_priced_cart(&priced);

                let verdict = if self.expected_error.is_some() {
                    Verdict::Incorrect
                } else {
                    receipt.verdict(self.final_expected_cost)
                };

                CaseOutcome::Priced { receipt, verdict }
            }
            Err(error) => {
                let verdict = match self.expected_error.as_deref() {
                    Some(expected) if expected == error.to_string() => Verdict::Correct,
                    Some(_) => Verdict::Incorrect,
                    None => Verdict::Rejected,
                };

                CaseOutcome::Rejected { error, verdict }
            }
        };

        Ok(outcome)
    }
}

/// Result of evaluating one case.
#[derive(Debug, Clone)]
pub enum CaseOutcome {
    /// The cart was priced.
    Priced {
        /// Itemized receipt
        receipt: Receipt,

        /// Comparison with the expected price
        verdict: Verdict,
    },

    /// The campaign definitions were rejected.
    Rejected {
        /// Classification error
        error: ProcessorError,

        /// Comparison with the expected error
        verdict: Verdict,
    },
}

impl CaseOutcome {
    /// Verdict for the case.
    pub fn verdict(&self) -> Verdict {
        match self {
            CaseOutcome::Priced { verdict, .. } | CaseOutcome::Rejected { verdict, .. } => {
                *verdict
            }
        }
    }
}

/// Cart line item from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub product_name: String,

    /// Unit price
    pub cost: f64,

    /// Quantity
    pub units: u32,

    /// Category used by category campaigns
    pub item_category: String,
}

impl From<&ProductFixture> for CartItem {
    fn from(product: &ProductFixture) -> Self {
        CartItem::new(
            product.product_name.as_str(),
            product.cost,
            product.units,
            product.item_category.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::cart::CartError;

    use super::*;

    #[test]
    fn case_parses_products_and_promos() -> TestResult {
        let yaml = r"
test_name: Fixed coupon
products:
  - product_name: A
    cost: 100
    units: 2
    item_category: X
promos:
  - type: fixed_amount
    code: F1
    amount: 20
final_expected_cost: 180
";
        let case: PricingCase = serde_norway::from_str(yaml)?;
        let cart = case.cart()?;

        assert_eq!(case.name(), "Fixed coupon");
        assert_eq!(case.promos.len(), 1);
        assert_eq!(cart.len(), 1);
        assert!((cart.total_base_price() - 200.0).abs() < f64::EPSILON);
        assert_eq!(case.final_expected_cost, Some(180.0));

        Ok(())
    }

    #[test]
    fn evaluate_judges_final_price() -> TestResult {
        let yaml = r"
products:
  - product_name: A
    cost: 100
    units: 2
    item_category: X
promos:
  - type: fixed_amount
    code: F1
    amount: 20
final_expected_cost: 180
";
        let mut case: PricingCase = serde_norway::from_str(yaml)?;
        let processor = DiscountProcessor::new();

        assert_eq!(case.evaluate(&processor)?.verdict(), Verdict::Correct);

        case.final_expected_cost = Some(200.0);

        assert_eq!(case.evaluate(&processor)?.verdict(), Verdict::Incorrect);

        Ok(())
    }

    #[test]
    fn evaluate_matches_expected_error() -> TestResult {
        let yaml = r"
products:
  - product_name: A
    cost: 100
    units: 1
    item_category: X
promos:
  - type: buy_one_get_one
    code: B1G1
expected_error: 'Unknown campaign type: buy_one_get_one'
";
        let mut case: PricingCase = serde_norway::from_str(yaml)?;
        let processor = DiscountProcessor::new();

        let outcome = case.evaluate(&processor)?;

        assert!(matches!(
            outcome,
            CaseOutcome::Rejected {
                error: ProcessorError::UnknownCampaignType(_),
                verdict: Verdict::Correct,
            }
        ));

        case.expected_error = Some("Only one Seasonal campaign is allowed".to_string());

        assert_eq!(case.evaluate(&processor)?.verdict(), Verdict::Incorrect);

        case.expected_error = None;

        assert_eq!(case.evaluate(&processor)?.verdict(), Verdict::Rejected);

        Ok(())
    }

    #[test]
    fn evaluate_flags_missing_rejection() -> TestResult {
        let yaml = r"
products:
  - product_name: A
    cost: 100
    units: 1
    item_category: X
promos: []
expected_error: Only one On Top campaign is allowed
";
        let case: PricingCase = serde_norway::from_str(yaml)?;

        assert_eq!(
            case.evaluate(&DiscountProcessor::new())?.verdict(),
            Verdict::Incorrect
        );

        Ok(())
    }

    #[test]
    fn case_without_name_uses_placeholder() -> TestResult {
        let case: PricingCase = serde_norway::from_str("products: []\n")?;

        assert_eq!(case.name(), UNNAMED_CASE);
        assert!(case.promos.is_empty());
        assert!(case.final_expected_cost.is_none());

        Ok(())
    }

    #[test]
    fn product_missing_cost_is_rejected() {
        let yaml = r"
products:
  - product_name: A
    units: 1
    item_category: X
";
        let result: Result<PricingCase, _> = serde_norway::from_str(yaml);

        assert!(result.is_err());
    }

    #[test]
    fn zero_units_fail_cart_construction() -> TestResult {
        let yaml = r"
products:
  - product_name: A
    cost: 10
    units: 0
    item_category: X
";
        let case: PricingCase = serde_norway::from_str(yaml)?;

        assert!(matches!(
            case.cart(),
            Err(FixtureError::Cart(CartError::InvalidQuantity(0)))
        ));

        Ok(())
    }
}
