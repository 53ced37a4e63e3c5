//! Checkout Flow
//!
//! The UI-free state machine behind the pricing page: plan selection,
//! coupon application, and order derivation. All of it is owned by the
//! page controller and mutated only from its event handlers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::ENTERPRISE_CONTACT_URL;
use crate::coupon::AppliedCoupon;
use crate::error::{PricingError, Result};
use crate::plan::{discounted_price, BillingPeriod, Plan};

/// Snapshot taken when the user picks a plan. The billing period is
/// captured at selection time; flipping the toggle afterwards changes
/// the cards but not an existing selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub plan: Plan,
    pub period: BillingPeriod,
}

/// Outcome of a plan selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Plan recorded as the current selection
    Selected,

    /// Enterprise plans route to sales instead of checkout
    ContactRedirect(&'static str),
}

/// Checkout payload handed to the payment gateway
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub plan_id: String,
    pub amount: Option<Decimal>,
    pub period: BillingPeriod,
    pub coupon_code: Option<String>,
}

/// All mutable state owned by the pricing page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckoutFlow {
    period: BillingPeriod,
    selection: Option<Selection>,
    coupon: Option<AppliedCoupon>,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period(&self) -> BillingPeriod {
        self.period
    }

    /// Flip the billing toggle. Affects card price derivation for all
    /// plans uniformly; existing selections keep their snapshot.
    pub fn set_period(&mut self, period: BillingPeriod) {
        self.period = period;
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn coupon(&self) -> Option<&AppliedCoupon> {
        self.coupon.as_ref()
    }

    /// Record a plan choice, overwriting any prior selection. There is no
    /// deselect path. Enterprise plans never become the selection.
    pub fn select(&mut self, plan: &Plan) -> SelectionOutcome {
        if plan.enterprise {
            tracing::debug!(plan = %plan.id, "enterprise plan routed to sales");
            return SelectionOutcome::ContactRedirect(ENTERPRISE_CONTACT_URL);
        }
        self.selection = Some(Selection {
            plan: plan.clone(),
            period: self.period,
        });
        SelectionOutcome::Selected
    }

    /// Store an accepted coupon, replacing any previous one
    pub fn apply_coupon(&mut self, coupon: AppliedCoupon) {
        self.coupon = Some(coupon);
    }

    /// Whether this plan is the current selection
    pub fn is_selected(&self, plan: &Plan) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|sel| sel.plan.id == plan.id)
    }

    /// Derived price of the current selection for its snapshot period
    pub fn selected_price(&self) -> Option<Decimal> {
        let sel = self.selection.as_ref()?;
        sel.plan.effective_price(sel.period)
    }

    /// Selected price with any stored coupon applied
    pub fn discounted_selected_price(&self) -> Option<Decimal> {
        self.selected_price()
            .map(|price| discounted_price(price, self.coupon.as_ref()))
    }

    /// Discounted price a card should show for this plan under the live
    /// toggle. Only the selected plan with a coupon in force gets one.
    pub fn card_discounted_price(&self, plan: &Plan) -> Option<Decimal> {
        let coupon = self.coupon.as_ref()?;
        if !self.is_selected(plan) {
            return None;
        }
        let price = plan.effective_price(self.period)?;
        Some(discounted_price(price, Some(coupon)))
    }

    /// Build the checkout payload for the current selection
    pub fn order(&self) -> Result<Order> {
        let sel = self.selection.as_ref().ok_or(PricingError::NoPlanSelected)?;
        Ok(Order {
            plan_id: sel.plan.id.clone(),
            amount: self.discounted_selected_price(),
            period: sel.period,
            coupon_code: self.coupon.as_ref().map(|c| c.code.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coupon::CouponPolicy;
    use rust_decimal_macros::dec;

    fn pro() -> Plan {
        let mut plan = Plan::new("pro", "Professional", dec!(20));
        plan.yearly_price = Some(dec!(200));
        plan
    }

    fn enterprise() -> Plan {
        let mut plan = Plan::new("enterprise", "Enterprise", dec!(0));
        plan.monthly_price = None;
        plan.enterprise = true;
        plan
    }

    #[test]
    fn test_enterprise_selection_is_a_dead_end() {
        let mut flow = CheckoutFlow::new();
        let outcome = flow.select(&enterprise());
        assert_eq!(outcome, SelectionOutcome::ContactRedirect(ENTERPRISE_CONTACT_URL));
        assert!(flow.selection().is_none());
        assert_eq!(flow.order(), Err(PricingError::NoPlanSelected));
    }

    #[test]
    fn test_selection_overwrites_previous() {
        let mut flow = CheckoutFlow::new();
        flow.select(&Plan::new("basic", "Basic", dec!(29)));
        flow.select(&pro());
        assert_eq!(flow.selection().map(|s| s.plan.id.as_str()), Some("pro"));
    }

    #[test]
    fn test_selection_snapshots_billing_period() {
        let mut flow = CheckoutFlow::new();
        flow.select(&pro());
        flow.set_period(BillingPeriod::Yearly);
        // Cards now derive yearly prices, but the selection keeps monthly
        assert_eq!(flow.selected_price(), Some(dec!(20)));
    }

    #[test]
    fn test_price_unchanged_without_coupon() {
        let mut flow = CheckoutFlow::new();
        flow.select(&pro());
        assert_eq!(flow.selected_price(), Some(dec!(20)));
        assert_eq!(flow.discounted_selected_price(), Some(dec!(20)));
    }

    #[test]
    fn test_coupon_discounts_selected_price() {
        let mut flow = CheckoutFlow::new();
        flow.set_period(BillingPeriod::Yearly);
        flow.select(&pro());
        assert_eq!(flow.selected_price(), Some(dec!(200)));

        let policy = CouponPolicy::AcceptAny { rate: dec!(0.20) };
        flow.apply_coupon(policy.validate("ANYCODE").unwrap());
        assert_eq!(flow.discounted_selected_price(), Some(dec!(160)));
    }

    #[test]
    fn test_new_coupon_replaces_previous() {
        let mut flow = CheckoutFlow::new();
        flow.select(&pro());
        flow.apply_coupon(AppliedCoupon { code: "first".into(), rate: dec!(0.20) });
        flow.apply_coupon(AppliedCoupon { code: "second".into(), rate: dec!(0.50) });
        assert_eq!(flow.coupon().map(|c| c.code.as_str()), Some("second"));
        assert_eq!(flow.discounted_selected_price(), Some(dec!(10)));
    }

    #[test]
    fn test_card_discount_only_for_selected_plan_with_coupon() {
        let mut flow = CheckoutFlow::new();
        let basic = Plan::new("basic", "Basic", dec!(29));

        // No coupon yet: nothing to strike through
        flow.select(&pro());
        assert_eq!(flow.card_discounted_price(&pro()), None);

        flow.apply_coupon(AppliedCoupon { code: "discount50".into(), rate: dec!(0.50) });
        assert_eq!(flow.card_discounted_price(&pro()), Some(dec!(10)));
        assert_eq!(flow.card_discounted_price(&basic), None);
    }

    #[test]
    fn test_order_carries_amount_and_coupon() {
        let mut flow = CheckoutFlow::new();
        flow.select(&pro());
        flow.apply_coupon(AppliedCoupon { code: "discount50".into(), rate: dec!(0.50) });

        let order = flow.order().unwrap();
        assert_eq!(order.plan_id, "pro");
        assert_eq!(order.amount, Some(dec!(10)));
        assert_eq!(order.period, BillingPeriod::Monthly);
        assert_eq!(order.coupon_code.as_deref(), Some("discount50"));
    }
}
