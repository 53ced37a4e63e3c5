//! Coupon Policy
//!
//! Validation of user-supplied coupon codes. Input is trimmed and
//! lower-cased before comparison; empty input is rejected without any
//! user-visible feedback.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};

/// An accepted coupon, stored by the page controller until replaced by
/// the next successful application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppliedCoupon {
    /// Normalized code the user entered
    pub code: String,

    /// Flat discount rate (0.5 = 50% off)
    pub rate: Decimal,
}

/// Coupon acceptance policy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CouponPolicy {
    /// Accept any non-empty code at a fixed rate (demo mode)
    AcceptAny { rate: Decimal },

    /// Accept exactly one code, reject everything else
    ExactMatch { code: String, rate: Decimal },
}

impl Default for CouponPolicy {
    /// The policy in force on the pricing page: "discount50" for half off
    fn default() -> Self {
        CouponPolicy::ExactMatch {
            code: "discount50".into(),
            rate: dec!(0.50),
        }
    }
}

impl CouponPolicy {
    /// Discount rate this policy grants on acceptance
    pub fn rate(&self) -> Decimal {
        match self {
            CouponPolicy::AcceptAny { rate } | CouponPolicy::ExactMatch { rate, .. } => *rate,
        }
    }

    /// Validate a raw user-entered code
    pub fn validate(&self, input: &str) -> Result<AppliedCoupon> {
        let code = input.trim();
        if code.is_empty() {
            return Err(PricingError::EmptyCoupon);
        }
        let code = code.to_lowercase();

        match self {
            CouponPolicy::AcceptAny { rate } => Ok(AppliedCoupon { code, rate: *rate }),
            CouponPolicy::ExactMatch { code: accepted, rate } => {
                if code == accepted.to_lowercase() {
                    Ok(AppliedCoupon { code, rate: *rate })
                } else {
                    tracing::debug!(%code, "coupon rejected");
                    Err(PricingError::CouponRejected(code))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        let policy = CouponPolicy::default();
        assert_eq!(policy.validate(""), Err(PricingError::EmptyCoupon));
        assert_eq!(policy.validate("   "), Err(PricingError::EmptyCoupon));
        assert_eq!(policy.validate("\t\n"), Err(PricingError::EmptyCoupon));
    }

    #[test]
    fn test_accept_any_takes_any_code() {
        let policy = CouponPolicy::AcceptAny { rate: dec!(0.20) };
        let coupon = policy.validate("ANYCODE").unwrap();
        assert_eq!(coupon.code, "anycode");
        assert_eq!(coupon.rate, dec!(0.20));
    }

    #[test]
    fn test_exact_match_accepts_case_insensitive() {
        let policy = CouponPolicy::default();
        let coupon = policy.validate("  Discount50 ").unwrap();
        assert_eq!(coupon.code, "discount50");
        assert_eq!(coupon.rate, dec!(0.50));
    }

    #[test]
    fn test_exact_match_rejects_wrong_code() {
        let policy = CouponPolicy::default();
        assert_eq!(
            policy.validate("WRONG"),
            Err(PricingError::CouponRejected("wrong".into()))
        );
    }
}
