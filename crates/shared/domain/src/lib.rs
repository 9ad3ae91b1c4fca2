//! # Domain Models
//!
//! Pure pricing types with a single dependency (`serde`).
//! Keep it lean: no I/O and no rendering, just the plan data, the catalog and
//! the configuration shapes shared by the apps.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod plan;

pub use crate::plan::{Plan, Price};
