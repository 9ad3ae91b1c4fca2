use crate::tier::PricingTier;
use dioxus::prelude::*;
use flexiforms_domain::constants::{
    CONTAINER_CLASS, CTA_CLASS, CTA_CONTACT, CTA_SIGN_UP, ENTERPRISE_PLAN_ID,
};
use flexiforms_domain::{Plan, catalog};

/// Call-to-action label for a plan: enterprise goes through sales, everything
/// else signs up directly.
#[must_use]
pub fn cta_label(plan_id: &str) -> &'static str {
    if plan_id == ENTERPRISE_PLAN_ID { CTA_CONTACT } else { CTA_SIGN_UP }
}

/// One card per plan, in the given order, each keyed by plan id.
#[component]
pub fn PricingPage(plans: &'static [Plan]) -> Element {
    rsx! {
        div { class: CONTAINER_CLASS,
            for (plan, label) in plans.iter().map(|plan| (plan, cta_label(plan.id))) {
                PricingTier {
                    key: "{plan.id}",
                    title: plan.title,
                    price: plan.price,
                    features: plan.features,
                    is_featured: plan.is_featured,
                    button { class: CTA_CLASS, "{label}" }
                }
            }
        }
    }
}

/// Root component: the pricing page over the compiled-in catalog.
#[component]
pub fn App() -> Element {
    rsx! {
        PricingPage { plans: catalog::plans() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enterprise_contacts_sales() {
        assert_eq!(cta_label("plan_enterprise"), "Contact Us");
    }

    #[test]
    fn other_plans_sign_up() {
        assert_eq!(cta_label("plan_basic"), "Sign Up Now");
        assert_eq!(cta_label("plan_pro"), "Sign Up Now");
        assert_eq!(cta_label(""), "Sign Up Now");
        assert_eq!(cta_label("PLAN_ENTERPRISE"), "Sign Up Now");
    }
}
