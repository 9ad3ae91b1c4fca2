/// Identifier of the plan that is sold through sales instead of self sign-up.
pub const ENTERPRISE_PLAN_ID: &str = "plan_enterprise";

pub const CTA_CONTACT: &str = "Contact Us";
pub const CTA_SIGN_UP: &str = "Sign Up Now";

// CSS classes shared between the components and the stylesheet.
pub const CONTAINER_CLASS: &str = "container";
pub const CARD_CLASS: &str = "pricing-card";
pub const FEATURED_CLASS: &str = "featured";
pub const PRICE_CLASS: &str = "price";
pub const CTA_CLASS: &str = "cta";
