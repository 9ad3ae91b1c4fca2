use dioxus::prelude::*;
use flexiforms_domain::Price;
use flexiforms_domain::constants::{CARD_CLASS, FEATURED_CLASS, PRICE_CLASS};

/// CSS class list of a card; featured plans get the emphasis class.
#[must_use]
pub fn card_class(is_featured: bool) -> String {
    if is_featured { format!("{CARD_CLASS} {FEATURED_CLASS}") } else { CARD_CLASS.to_owned() }
}

/// A single pricing card.
///
/// Shows the title, the formatted price and the features in order, followed by
/// `children` (usually the call-to-action button). Nothing is validated.
#[component]
pub fn PricingTier(
    title: &'static str,
    price: Price,
    features: &'static [&'static str],
    is_featured: bool,
    children: Element,
) -> Element {
    rsx! {
        div { class: card_class(is_featured),
            h2 { "{title}" }
            p { class: PRICE_CLASS, "{price}" }
            ul {
                for (index, feature) in features.iter().enumerate() {
                    li { key: "{index}", "{feature}" }
                }
            }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_card_gets_emphasis_class() {
        assert_eq!(card_class(true), "pricing-card featured");
    }

    #[test]
    fn regular_card_has_base_class_only() {
        assert_eq!(card_class(false), "pricing-card");
    }
}
