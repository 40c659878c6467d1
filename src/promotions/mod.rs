//! Promotions

use crate::cart::Cart;

pub mod definitions;
pub mod types;

pub use types::{CategoryOnTop, FixedCoupon, PercentCoupon, PointOnTop, SeasonalCampaign};

/// Where a campaign sits in the fixed application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignSlot {
    /// Fixed or percentage coupons; only the best one is applied.
    Coupon,

    /// Category or points bonus applied after the coupon.
    OnTop,

    /// Seasonal bulk discount applied last.
    Seasonal,
}

/// Campaign enum
#[derive(Debug, Clone, PartialEq)]
pub enum Campaign {
    /// Fixed amount coupon
    FixedCoupon(FixedCoupon),

    /// Percentage coupon
    PercentCoupon(PercentCoupon),

    /// Seasonal bulk discount
    Seasonal(SeasonalCampaign),

    /// Category percentage on top
    CategoryOnTop(CategoryOnTop),

    /// Loyalty points on top
    PointOnTop(PointOnTop),
}

impl Campaign {
    /// Return the campaign code.
    pub fn code(&self) -> &str {
        match self {
            Campaign::FixedCoupon(campaign) => campaign.code(),
            Campaign::PercentCoupon(campaign) => campaign.code(),
            Campaign::Seasonal(campaign) => campaign.code(),
            Campaign::CategoryOnTop(campaign) => campaign.code(),
            Campaign::PointOnTop(campaign) => campaign.code(),
        }
    }

    /// Return the display name recorded as the source of every discount.
    pub fn name(&self) -> &str {
        match self {
            Campaign::FixedCoupon(campaign) => campaign.name(),
            Campaign::PercentCoupon(campaign) => campaign.name(),
            Campaign::Seasonal(campaign) => campaign.name(),
            Campaign::CategoryOnTop(campaign) => campaign.name(),
            Campaign::PointOnTop(campaign) => campaign.name(),
        }
    }

    /// Return the application slot for this campaign.
    pub fn slot(&self) -> CampaignSlot {
        match self {
            Campaign::FixedCoupon(_) | Campaign::PercentCoupon(_) => CampaignSlot::Coupon,
            Campaign::CategoryOnTop(_) | Campaign::PointOnTop(_) => CampaignSlot::OnTop,
            Campaign::Seasonal(_) => CampaignSlot::Seasonal,
        }
    }

    /// Value used to compare campaigns before anything is applied.
    pub fn estimated_value(&self, cart: &Cart, total_base_price: f64) -> f64 {
        match self {
            Campaign::FixedCoupon(campaign) => campaign.estimated_value(),
            Campaign::PercentCoupon(campaign) => campaign.estimated_value(total_base_price),
            Campaign::Seasonal(campaign) => campaign.estimated_value(total_base_price),
            Campaign::CategoryOnTop(campaign) => campaign.estimated_value(cart),
            Campaign::PointOnTop(campaign) => campaign.estimated_value(total_base_price),
        }
    }

    /// Apply the campaign to the cart, returning the amount actually discounted.
    pub fn apply(&self, cart: &mut Cart, total_base_price: f64) -> f64 {
        match self {
            Campaign::FixedCoupon(campaign) => campaign.apply(cart, total_base_price),
            Campaign::PercentCoupon(campaign) => campaign.apply(cart, total_base_price),
            Campaign::Seasonal(campaign) => campaign.apply(cart, total_base_price),
            Campaign::CategoryOnTop(campaign) => campaign.apply(cart),
            Campaign::PointOnTop(campaign) => campaign.apply(cart, total_base_price),
        }
    }
}
