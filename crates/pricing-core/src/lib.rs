//! # pricing-core
//!
//! Domain logic for the subscription pricing demo: the plan catalog,
//! price and discount derivation, coupon policy, and the checkout flow
//! state machine behind the pricing page.
//!
//! Everything here is synchronous and UI-free. The two async steps of the
//! demo (coupon validation latency and payment initiation) live in the
//! `pricing-web` and `pricing-payments` crates; this crate only decides
//! what they resolve to.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐  select   ┌──────────────────┐  apply    ┌────────────────────┐
//! │ no plan      │──────────▶│ plan selected,   │──────────▶│ plan selected,     │
//! │ selected     │           │ no coupon        │           │ coupon applied     │
//! └──────────────┘           └──────────────────┘           └────────────────────┘
//!        │                            │ checkout                     │ checkout
//!        │ select enterprise          ▼                              ▼
//!        ▼                    ┌──────────────────────────────────────────┐
//! ┌──────────────┐            │ order handed to the payment gateway      │
//! │ contact page │            └──────────────────────────────────────────┘
//! └──────────────┘
//! ```
//!
//! Enterprise plans are a dead end: they route to sales and never enter
//! the checkout states.

pub mod catalog;
pub mod coupon;
pub mod error;
pub mod flow;
pub mod plan;

pub use catalog::{Catalog, ENTERPRISE_CONTACT_URL};
pub use coupon::{AppliedCoupon, CouponPolicy};
pub use error::{PricingError, Result};
pub use flow::{CheckoutFlow, Order, Selection, SelectionOutcome};
pub use plan::{discounted_price, format_price, BillingPeriod, Plan};
