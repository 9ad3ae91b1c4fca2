//! Pricing page feature slice.
//!
//! * [`tier::PricingTier`] renders one plan as a card.
//! * [`page::PricingPage`] lays out one card per plan and picks each call-to-action.
//! * [`render`] turns the components into HTML without a window, through `dioxus-ssr`.
//!
//! The components are pure: the same plans always produce the same tree.

pub mod page;
pub mod render;
pub mod styles;
pub mod tier;

pub use crate::page::{App, PricingPage, cta_label};
pub use crate::render::{render_app, render_card, render_page};
pub use crate::styles::STYLESHEET;
pub use crate::tier::{PricingTier, card_class};
