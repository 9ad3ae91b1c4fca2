//! Static rendering of the pricing components to HTML strings.
//!
//! Every call builds a fresh [`VirtualDom`], so the output depends only on the
//! input plans.

use crate::page::{App, PricingPage, PricingPageProps};
use crate::tier::PricingTier;
use dioxus::prelude::*;
use flexiforms_domain::constants::CTA_CLASS;
use flexiforms_domain::{Plan, catalog};
use tracing::debug;

/// Renders [`App`], the page over the compiled-in catalog.
#[must_use]
pub fn render_app() -> String {
    debug!(plans = catalog::plans().len(), "Rendering pricing app");
    render_dom(VirtualDom::new(App))
}

/// Renders [`PricingPage`] over an arbitrary plan slice.
#[must_use]
pub fn render_page(plans: &'static [Plan]) -> String {
    debug!(plans = plans.len(), "Rendering pricing page");
    let props = PricingPageProps::builder().plans(plans).build();
    render_dom(VirtualDom::new_with_props(PricingPage, props))
}

/// Renders a single card, with a call-to-action button when `cta` is set.
#[must_use]
pub fn render_card(plan: Plan, cta: Option<&'static str>) -> String {
    debug!(plan = plan.id, "Rendering pricing card");
    render_dom(VirtualDom::new_with_props(CardRoot, CardRootProps { plan, cta }))
}

fn render_dom(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[derive(Debug, Props, Clone, PartialEq)]
struct CardRootProps {
    plan: Plan,
    cta: Option<&'static str>,
}

#[allow(non_snake_case)]
fn CardRoot(props: CardRootProps) -> Element {
    let CardRootProps { plan, cta } = props;
    rsx! {
        PricingTier {
            title: plan.title,
            price: plan.price,
            features: plan.features,
            is_featured: plan.is_featured,
            if let Some(label) = cta {
                button { class: CTA_CLASS, "{label}" }
            }
        }
    }
}
