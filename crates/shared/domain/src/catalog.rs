//! The compiled-in plan catalog.

use crate::plan::{Plan, Price};

/// All pricing tiers, in display order.
pub static PRICING_DATA: &[Plan] = &[
    Plan {
        id: "plan_basic",
        title: "Basic",
        price: Price::Monthly(12.0),
        features: &[
            "10 Form Submissions per Month",
            "Basic Form Fields",
            "Email Notifications",
            "Community Support",
        ],
        is_featured: false,
    },
    Plan {
        id: "plan_pro",
        title: "Pro",
        price: Price::Monthly(25.0),
        features: &[
            "Unlimited Form Submissions",
            "All Basic Features",
            "File Uploads & Webhooks",
            "Data Export",
            "Priority Email Support",
        ],
        is_featured: true,
    },
    Plan {
        id: "plan_enterprise",
        title: "Enterprise",
        price: Price::Label("Custom"),
        features: &[
            "All Pro Features",
            "Dedicated Account Manager",
            "Custom Integrations",
            "24/7 Phone Support",
            "Guaranteed SLAs",
        ],
        is_featured: false,
    },
];

/// Returns the catalog in display order.
#[must_use]
pub fn plans() -> &'static [Plan] {
    PRICING_DATA
}

/// Looks up a plan by its identifier.
#[must_use]
pub fn find(id: &str) -> Option<&'static Plan> {
    PRICING_DATA.iter().find(|plan| plan.id == id)
}

/// Plans flagged for visual emphasis, in catalog order.
pub fn featured() -> impl Iterator<Item = &'static Plan> {
    PRICING_DATA.iter().filter(|plan| plan.is_featured)
}
