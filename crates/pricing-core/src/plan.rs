//! Plan Model
//!
//! Core data types for subscription plans and price derivation.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coupon::AppliedCoupon;

/// Billing period for subscription pricing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn as_str(&self) -> &str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Yearly => "yearly",
        }
    }

    /// Suffix shown next to a rendered price
    pub fn suffix(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/month",
            BillingPeriod::Yearly => "/year",
        }
    }

    /// The other period (for the toggle control)
    pub fn toggled(self) -> Self {
        match self {
            BillingPeriod::Monthly => BillingPeriod::Yearly,
            BillingPeriod::Yearly => BillingPeriod::Monthly,
        }
    }
}

/// A subscription plan tier
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier (e.g., "pro")
    pub id: String,

    /// Display name
    pub name: String,

    /// Monthly price in USD (None for contact-us plans)
    pub monthly_price: Option<Decimal>,

    /// Yearly price in USD (falls back to 12x monthly when absent)
    pub yearly_price: Option<Decimal>,

    /// Ordered feature list
    pub features: Vec<String>,

    /// Highlighted as the most popular tier
    pub popular: bool,

    /// Enterprise plans have no numeric price and no checkout flow
    pub enterprise: bool,

    /// Call-to-action label
    pub cta: String,
}

impl Plan {
    pub fn new(id: impl Into<String>, name: impl Into<String>, monthly_price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            monthly_price: Some(monthly_price),
            yearly_price: None,
            features: Vec::new(),
            popular: false,
            enterprise: false,
            cta: "Select Plan".into(),
        }
    }

    /// Derived price for a billing period. Enterprise plans never have one.
    pub fn effective_price(&self, period: BillingPeriod) -> Option<Decimal> {
        if self.enterprise {
            return None;
        }
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Yearly => self
                .yearly_price
                .or_else(|| self.monthly_price.map(|p| p * Decimal::from(12))),
        }
    }
}

/// Apply a stored coupon to a derived price. The discount is a flat rate
/// regardless of the code's content; validation and rate selection happen
/// at application time, not here.
pub fn discounted_price(price: Decimal, coupon: Option<&AppliedCoupon>) -> Decimal {
    match coupon {
        Some(coupon) => price * (Decimal::ONE - coupon.rate),
        None => price,
    }
}

/// Render a price for display: at most two decimal places, trailing zeros
/// trimmed (so 79 stays "79" and half-off Basic is "14.5").
pub fn format_price(price: Decimal) -> String {
    price.round_dp(2).normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pro() -> Plan {
        let mut plan = Plan::new("pro", "Professional", dec!(20));
        plan.yearly_price = Some(dec!(200));
        plan
    }

    #[test]
    fn test_effective_price_monthly() {
        assert_eq!(pro().effective_price(BillingPeriod::Monthly), Some(dec!(20)));
    }

    #[test]
    fn test_effective_price_yearly_explicit() {
        assert_eq!(pro().effective_price(BillingPeriod::Yearly), Some(dec!(200)));
    }

    #[test]
    fn test_effective_price_yearly_falls_back_to_twelve_months() {
        let plan = Plan::new("basic", "Basic", dec!(29));
        assert_eq!(plan.effective_price(BillingPeriod::Yearly), Some(dec!(348)));
    }

    #[test]
    fn test_enterprise_plan_has_no_price() {
        let mut plan = Plan::new("enterprise", "Enterprise", dec!(149));
        plan.enterprise = true;
        assert_eq!(plan.effective_price(BillingPeriod::Monthly), None);
        assert_eq!(plan.effective_price(BillingPeriod::Yearly), None);
    }

    #[test]
    fn test_discounted_price_with_coupon() {
        let coupon = AppliedCoupon {
            code: "anycode".into(),
            rate: dec!(0.20),
        };
        assert_eq!(discounted_price(dec!(200), Some(&coupon)), dec!(160));
    }

    #[test]
    fn test_price_unchanged_without_coupon() {
        assert_eq!(discounted_price(dec!(20), None), dec!(20));
    }

    #[test]
    fn test_format_price_trims_trailing_zeros() {
        assert_eq!(format_price(dec!(79)), "79");
        assert_eq!(format_price(dec!(14.50)), "14.5");
        assert_eq!(format_price(dec!(39.5000)), "39.5");
    }

    #[test]
    fn test_toggled_period() {
        assert_eq!(BillingPeriod::Monthly.toggled(), BillingPeriod::Yearly);
        assert_eq!(BillingPeriod::Yearly.toggled(), BillingPeriod::Monthly);
    }
}
