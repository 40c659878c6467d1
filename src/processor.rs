//! Discount Processor
//!
//! Classifies campaign definitions, selects the best coupon and applies the
//! selection to a cart in a fixed order: coupon, then on-top, then seasonal.

use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    cart::Cart,
    promotions::{
        Campaign, CampaignSlot, CategoryOnTop, FixedCoupon, PercentCoupon, PointOnTop,
        SeasonalCampaign, definitions::CampaignDefinition,
    },
};

/// Errors raised while classifying campaign definitions.
///
/// Every variant is detected before any discount is applied.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProcessorError {
    /// A second category or points campaign was supplied.
    #[error("Only one On Top campaign is allowed")]
    DuplicateOnTopCampaign,

    /// A second seasonal campaign was supplied.
    #[error("Only one Seasonal campaign is allowed")]
    DuplicateSeasonalCampaign,

    /// The definition's `type` is not one of the five supported campaigns.
    #[error("Unknown campaign type: {0}")]
    UnknownCampaignType(String),

    /// A recognised campaign with unusable parameters.
    #[error("Invalid campaign {code}: {reason}")]
    InvalidCampaign {
        /// Campaign code
        code: String,

        /// What is wrong with it
        reason: &'static str,
    },
}

/// A campaign that was applied during a pricing run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedCampaign {
    /// Campaign code
    pub code: String,

    /// Display name, matching the source of its discount records
    pub name: String,

    /// Amount the campaign actually took off the cart
    pub amount_used: f64,
}

/// A cart after a successful pricing run.
#[derive(Debug, Clone)]
pub struct PricedCart {
    cart: Cart,
    total_base_price: f64,
    final_price: f64,
    applied: SmallVec<[AppliedCampaign; 3]>,
}

impl PricedCart {
    /// The cart, with every item's discount log populated.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart total before any discount.
    pub fn total_base_price(&self) -> f64 {
        self.total_base_price
    }

    /// Sum of every item's net price.
    pub fn final_price(&self) -> f64 {
        self.final_price
    }

    /// Total discounted across the cart.
    pub fn total_discount(&self) -> f64 {
        self.cart.total_discount()
    }

    /// Campaigns applied, in application order.
    pub fn applied_campaigns(&self) -> &[AppliedCampaign] {
        &self.applied
    }
}

/// The campaigns selected for one pricing run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignPlan {
    coupons: Vec<Campaign>,
    on_top: Option<Campaign>,
    seasonal: Option<Campaign>,
}

impl CampaignPlan {
    /// Classify definitions in input order.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessorError`] on the first duplicate on-top or seasonal campaign,
    /// unknown type, or invalid campaign, in input order.
    pub fn classify(definitions: &[CampaignDefinition]) -> Result<Self, ProcessorError> {
        let mut plan = CampaignPlan::default();

        for definition in definitions {
            let campaign = campaign_from_definition(definition)?;

            match campaign.slot() {
                CampaignSlot::Coupon => plan.coupons.push(campaign),
                CampaignSlot::OnTop => {
                    if plan.on_top.is_some() {
                        return Err(ProcessorError::DuplicateOnTopCampaign);
                    }

                    plan.on_top = Some(campaign);
                }
                CampaignSlot::Seasonal => {
                    if plan.seasonal.is_some() {
                        return Err(ProcessorError::DuplicateSeasonalCampaign);
                    }

                    plan.seasonal = Some(campaign);
                }
            }
        }

        Ok(plan)
    }

    /// Coupon candidates, in input order.
    pub fn coupons(&self) -> &[Campaign] {
        &self.coupons
    }

    /// The on-top campaign, if any.
    pub fn on_top(&self) -> Option<&Campaign> {
        self.on_top.as_ref()
    }

    /// The seasonal campaign, if any.
    pub fn seasonal(&self) -> Option<&Campaign> {
        self.seasonal.as_ref()
    }

    /// The coupon with the strictly greatest estimated value; the first wins ties.
    pub fn best_coupon(&self, cart: &Cart, total_base_price: f64) -> Option<&Campaign> {
        let mut best = None;
        let mut max_value = -1.0;

        for coupon in &self.coupons {
            let value = coupon.estimated_value(cart, total_base_price);

            if value > max_value {
                max_value = value;
                best = Some(coupon);
            }
        }

        best
    }
}

/// Stateless pricing engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountProcessor;

impl DiscountProcessor {
    /// Create a new processor.
    pub fn new() -> Self {
        Self
    }

    /// Price a cart against a list of campaign definitions.
    ///
    /// The processor owns the cart for the whole run and hands it back inside the
    /// [`PricedCart`].
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessorError`] if the definitions fail classification. No discount
    /// is applied in that case.
    #[tracing::instrument(skip_all, fields(items = cart.len(), campaigns = definitions.len()))]
    pub fn calculate_final_price(
        &self,
        mut cart: Cart,
        definitions: &[CampaignDefinition],
    ) -> Result<PricedCart, ProcessorError> {
        let plan = CampaignPlan::classify(definitions).inspect_err(|error| {
            warn!(%error, "rejected campaign definitions");
        })?;

        let total_base_price = cart.total_base_price();
        let best_coupon = plan.best_coupon(&cart, total_base_price);

        let mut applied = SmallVec::new();

        for campaign in [best_coupon, plan.on_top(), plan.seasonal()]
            .into_iter()
            .flatten()
        {
            let amount_used = campaign.apply(&mut cart, total_base_price);

            debug!(
                code = campaign.code(),
                campaign = campaign.name(),
                amount_used,
                "applied campaign"
            );

            applied.push(AppliedCampaign {
                code: campaign.code().to_string(),
                name: campaign.name().to_string(),
                amount_used,
            });
        }

        let final_price = cart.total_net_price();

        debug!(total_base_price, final_price, "priced cart");

        Ok(PricedCart {
            cart,
            total_base_price,
            final_price,
            applied,
        })
    }
}

/// Build a campaign from its definition, rejecting unknown types and unusable values.
fn campaign_from_definition(definition: &CampaignDefinition) -> Result<Campaign, ProcessorError> {
    let campaign = match definition {
        CampaignDefinition::FixedAmount { code, amount } => {
            ensure_finite(code, &[*amount])?;

            Campaign::FixedCoupon(FixedCoupon::new(code.as_str(), *amount))
        }
        CampaignDefinition::PercentageDiscount { code, percentage } => {
            ensure_finite(code, &[*percentage])?;

            Campaign::PercentCoupon(PercentCoupon::new(code.as_str(), *percentage))
        }
        CampaignDefinition::PercentageCategoryOnTop {
            code,
            item_category,
            percentage,
        } => {
            ensure_finite(code, &[*percentage])?;

            Campaign::CategoryOnTop(CategoryOnTop::new(
                code.as_str(),
                item_category.as_str(),
                *percentage,
            ))
        }
        CampaignDefinition::PointDiscountOnTop { code, points } => {
            ensure_finite(code, &[*points])?;

            Campaign::PointOnTop(PointOnTop::new(code.as_str(), *points))
        }
        CampaignDefinition::Seasonal {
            code,
            every_amount,
            discount,
        } => {
            ensure_finite(code, &[*every_amount, *discount])?;

            if *every_amount == 0.0 {
                return Err(ProcessorError::InvalidCampaign {
                    code: code.clone(),
                    reason: "every_amount must not be zero",
                });
            }

            Campaign::Seasonal(SeasonalCampaign::new(
                code.as_str(),
                *every_amount,
                *discount,
            ))
        }
        CampaignDefinition::Unknown { kind } => {
            return Err(ProcessorError::UnknownCampaignType(kind.clone()));
        }
    };

    Ok(campaign)
}

fn ensure_finite(code: &str, values: &[f64]) -> Result<(), ProcessorError> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ProcessorError::InvalidCampaign {
            code: code.to_string(),
            reason: "numeric values must be finite",
        })
    }
}
