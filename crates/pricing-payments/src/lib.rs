//! # pricing-payments
//!
//! Payment initiation for the pricing demo.
//!
//! The processor client here is an explicit mock boundary: the session a
//! real integration would obtain from a trusted backend is constructed in
//! memory, logged, and immediately discarded. Nothing is transmitted.
//!
//! ```text
//! ┌──────────────┐  PaymentRequest  ┌─────────────────────┐
//! │ pricing page │─────────────────▶│  MockPaymentGateway │
//! └──────────────┘                  └──────────┬──────────┘
//!        ▲                                     │ builds + logs
//!        │ PaymentOutcome                      ▼
//!        └────────────────────────── PaymentSession (in memory only)
//! ```
//!
//! A production replacement implements [`PaymentGateway`] with:
//! (a) a session-creation request to a trusted backend,
//! (b) redirection to the processor's hosted checkout page,
//! (c) a webhook or redirect callback confirming completion.

mod config;
mod error;
mod gateway;

pub use config::{GatewayConfig, DEMO_PUBLISHABLE_KEY};
pub use error::{PaymentError, Result};
pub use gateway::{
    MockPaymentGateway, PaymentGateway, PaymentOutcome, PaymentRequest, PaymentSession,
};
