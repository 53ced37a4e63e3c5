//! Plan Catalog
//!
//! Static plan definitions, fixed at startup and never mutated.

use rust_decimal_macros::dec;

use crate::plan::Plan;

/// Where enterprise plan selection routes instead of checkout
pub const ENTERPRISE_CONTACT_URL: &str = "mailto:sales@example.com";

/// The ordered set of offered plans
#[derive(Clone, Debug)]
pub struct Catalog {
    plans: Vec<Plan>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The three-tier catalog shown on the pricing page
    pub fn standard() -> Self {
        Self {
            plans: vec![
                Plan {
                    id: "basic".into(),
                    name: "Basic".into(),
                    monthly_price: Some(dec!(29)),
                    yearly_price: Some(dec!(290)),
                    features: vec![
                        "Up to 5 projects".into(),
                        "Basic analytics".into(),
                        "24/7 support".into(),
                        "1GB storage".into(),
                    ],
                    popular: false,
                    enterprise: false,
                    cta: "Select Plan".into(),
                },
                Plan {
                    id: "pro".into(),
                    name: "Professional".into(),
                    monthly_price: Some(dec!(79)),
                    yearly_price: Some(dec!(790)),
                    features: vec![
                        "Unlimited projects".into(),
                        "Advanced analytics".into(),
                        "Priority support".into(),
                        "10GB storage".into(),
                        "Custom domain".into(),
                    ],
                    popular: true,
                    enterprise: false,
                    cta: "Select Plan".into(),
                },
                Plan {
                    id: "enterprise".into(),
                    name: "Enterprise".into(),
                    monthly_price: None,
                    yearly_price: None,
                    features: vec![
                        "Everything in Pro".into(),
                        "Enterprise analytics".into(),
                        "Dedicated support".into(),
                        "Unlimited storage".into(),
                        "SLA guarantee".into(),
                        "Custom integration".into(),
                    ],
                    popular: false,
                    enterprise: true,
                    cta: "Contact Sales".into(),
                },
            ],
        }
    }

    /// Plans in display order
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Look up a plan by id
    pub fn find(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::BillingPeriod;

    #[test]
    fn test_catalog_order_and_lookup() {
        let catalog = Catalog::standard();
        let ids: Vec<&str> = catalog.plans().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["basic", "pro", "enterprise"]);
        assert_eq!(catalog.find("pro").map(|p| p.name.as_str()), Some("Professional"));
        assert!(catalog.find("unknown").is_none());
    }

    #[test]
    fn test_single_popular_plan() {
        let catalog = Catalog::standard();
        let popular = catalog.plans().iter().filter(|p| p.popular).count();
        assert_eq!(popular, 1);
    }

    #[test]
    fn test_enterprise_tier_is_priceless() {
        let catalog = Catalog::standard();
        let enterprise = catalog.find("enterprise").unwrap();
        assert!(enterprise.enterprise);
        assert_eq!(enterprise.effective_price(BillingPeriod::Monthly), None);
        assert_eq!(enterprise.effective_price(BillingPeriod::Yearly), None);
    }
}
