//! Campaign Definitions
//!
//! The raw, transport-independent shape of a promotion before classification.

use serde::{Deserialize, Deserializer, de};
use serde_norway::Value;

/// Placeholder type name for a definition without a `type` field.
pub const MISSING_TYPE: &str = "None";

/// A campaign definition, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq)]
pub enum CampaignDefinition {
    /// `fixed_amount`
    FixedAmount {
        /// Campaign code
        code: String,

        /// Flat amount off the cart
        amount: f64,
    },

    /// `percentage_discount`
    PercentageDiscount {
        /// Campaign code
        code: String,

        /// Percent points off the cart
        percentage: f64,
    },

    /// `percentage_category_on_top`
    PercentageCategoryOnTop {
        /// Campaign code
        code: String,

        /// Category the bonus targets
        item_category: String,

        /// Percent points off each matching item
        percentage: f64,
    },

    /// `point_discount_on_top`
    PointDiscountOnTop {
        /// Campaign code
        code: String,

        /// Points to redeem
        points: f64,
    },

    /// `seasonal`
    Seasonal {
        /// Campaign code
        code: String,

        /// Spend threshold per step
        every_amount: f64,

        /// Discount per step
        discount: f64,
    },

    /// Any other `type`; rejected during classification.
    Unknown {
        /// The unrecognised type name
        kind: String,
    },
}

impl CampaignDefinition {
    /// The `type` tag of this definition.
    pub fn kind(&self) -> &str {
        match self {
            CampaignDefinition::FixedAmount { .. } => "fixed_amount",
            CampaignDefinition::PercentageDiscount { .. } => "percentage_discount",
            CampaignDefinition::PercentageCategoryOnTop { .. } => "percentage_category_on_top",
            CampaignDefinition::PointDiscountOnTop { .. } => "point_discount_on_top",
            CampaignDefinition::Seasonal { .. } => "seasonal",
            CampaignDefinition::Unknown { kind } => kind,
        }
    }
}

/// The recognised definitions, as they appear on the wire.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum KnownDefinition {
    FixedAmount {
        code: String,
        amount: f64,
    },
    PercentageDiscount {
        code: String,
        percentage: f64,
    },
    PercentageCategoryOnTop {
        code: String,
        item_category: String,
        percentage: f64,
    },
    PointDiscountOnTop {
        code: String,
        points: f64,
    },
    Seasonal {
        code: String,
        every_amount: f64,
        discount: f64,
    },
}

impl From<KnownDefinition> for CampaignDefinition {
    fn from(known: KnownDefinition) -> Self {
        match known {
            KnownDefinition::FixedAmount { code, amount } => {
                CampaignDefinition::FixedAmount { code, amount }
            }
            KnownDefinition::PercentageDiscount { code, percentage } => {
                CampaignDefinition::PercentageDiscount { code, percentage }
            }
            KnownDefinition::PercentageCategoryOnTop {
                code,
                item_category,
                percentage,
            } => CampaignDefinition::PercentageCategoryOnTop {
                code,
                item_category,
                percentage,
            },
            KnownDefinition::PointDiscountOnTop { code, points } => {
                CampaignDefinition::PointDiscountOnTop { code, points }
            }
            KnownDefinition::Seasonal {
                code,
                every_amount,
                discount,
            } => CampaignDefinition::Seasonal {
                code,
                every_amount,
                discount,
            },
        }
    }
}

const KNOWN_TYPES: [&str; 5] = [
    "fixed_amount",
    "percentage_discount",
    "percentage_category_on_top",
    "point_discount_on_top",
    "seasonal",
];

impl<'de> Deserialize<'de> for CampaignDefinition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        let kind = match value.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            Some(Value::Null) | None => MISSING_TYPE.to_string(),
            Some(other) => serde_norway::to_string(other)
                .map(|rendered| rendered.trim_end().to_string())
                .map_err(de::Error::custom)?,
        };

        if !KNOWN_TYPES.contains(&kind.as_str()) {
            return Ok(CampaignDefinition::Unknown { kind });
        }

        KnownDefinition::deserialize(value)
            .map(CampaignDefinition::from)
            .map_err(de::Error::custom)
    }
}
