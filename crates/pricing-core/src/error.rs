//! Error Types for the Pricing Demo

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PricingError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Empty or whitespace-only coupon input. Callers treat this as a
    /// silent no-op rather than a user-visible failure.
    #[error("Coupon code is empty")]
    EmptyCoupon,

    #[error("Coupon code \"{0}\" is not valid")]
    CouponRejected(String),

    #[error("No plan selected")]
    NoPlanSelected,
}
