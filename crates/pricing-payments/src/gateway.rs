//! Payment Gateway
//!
//! Abstraction over the payment processor client, plus the mock the demo
//! ships with. The mock builds the session object a real client would send
//! to a backend, logs it, and reports success.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pricing_core::{BillingPeriod, Order};

use crate::config::GatewayConfig;
use crate::error::Result;

/// Request to initiate a payment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Plan being purchased
    pub plan_id: String,

    /// Amount due after discounts (absent for contact-us plans)
    pub amount: Option<Decimal>,

    /// Billing period captured at selection time
    pub period: BillingPeriod,

    /// Applied coupon code, if any
    #[serde(default)]
    pub coupon_code: Option<String>,
}

impl From<Order> for PaymentRequest {
    fn from(order: Order) -> Self {
        Self {
            plan_id: order.plan_id,
            amount: order.amount,
            period: order.period,
            coupon_code: order.coupon_code,
        }
    }
}

/// In-memory stand-in for a processor checkout session. Never transmitted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentSession {
    /// Session id
    pub id: String,

    pub plan_id: String,
    pub amount: Option<Decimal>,
    pub period: BillingPeriod,
    pub coupon_code: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Result of initiating a payment
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentOutcome {
    pub success: bool,
    pub session: PaymentSession,
}

/// Payment processor seam
///
/// Implement this for each processor: Stripe, Paddle, etc.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Initiate a checkout for the given request
    async fn initiate(&self, request: PaymentRequest) -> Result<PaymentOutcome>;

    /// Gateway name
    fn name(&self) -> &str;
}

/// Mock gateway for the demo. Succeeds whenever its config would let a
/// real browser SDK load.
pub struct MockPaymentGateway {
    config: GatewayConfig,
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new(GatewayConfig::default())
    }
}

impl MockPaymentGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn initiate(&self, request: PaymentRequest) -> Result<PaymentOutcome> {
        // The (unused) SDK handle is the only thing that can fail here
        self.config.validate()?;

        let session = PaymentSession {
            id: Uuid::new_v4().to_string(),
            plan_id: request.plan_id,
            amount: request.amount,
            period: request.period,
            coupon_code: request.coupon_code,
            created_at: Utc::now(),
        };

        // Logged, not transmitted
        let payload = serde_json::to_string(&session).unwrap_or_else(|_| format!("{session:?}"));
        tracing::info!(gateway = self.name(), session = %payload, "initiating payment");

        Ok(PaymentOutcome {
            success: true,
            session,
        })
    }

    fn name(&self) -> &str {
        "MockGateway"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request() -> PaymentRequest {
        PaymentRequest {
            plan_id: "pro".into(),
            amount: Some(dec!(39.50)),
            period: BillingPeriod::Monthly,
            coupon_code: Some("discount50".into()),
        }
    }

    #[tokio::test]
    async fn test_mock_gateway_succeeds() {
        let gateway = MockPaymentGateway::default();

        let outcome = gateway.initiate(request()).await.unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.session.plan_id, "pro");
        assert_eq!(outcome.session.amount, Some(dec!(39.50)));
        assert_eq!(outcome.session.coupon_code.as_deref(), Some("discount50"));
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_fails() {
        let gateway = MockPaymentGateway::new(GatewayConfig::new(""));
        let result = gateway.initiate(request()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_session_ids_are_unique() {
        let gateway = MockPaymentGateway::default();
        let first = gateway.initiate(request()).await.unwrap();
        let second = gateway.initiate(request()).await.unwrap();
        assert_ne!(first.session.id, second.session.id);
    }

    #[test]
    fn test_request_from_order() {
        let order = Order {
            plan_id: "basic".into(),
            amount: Some(dec!(29)),
            period: BillingPeriod::Yearly,
            coupon_code: None,
        };
        let request = PaymentRequest::from(order);
        assert_eq!(request.plan_id, "basic");
        assert_eq!(request.period, BillingPeriod::Yearly);
        assert!(request.coupon_code.is_none());
    }
}
