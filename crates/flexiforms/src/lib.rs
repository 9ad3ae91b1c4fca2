//! Facade crate for FlexiForms features and shared modules.
//! Re-exports domain/kernel primitives and the enabled feature slices.
//! Keep this crate thin: it composes other crates, it does not implement logic.

pub use flexiforms_domain as domain;
pub use flexiforms_kernel as kernel;
#[cfg(feature = "pricing")]
pub use flexiforms_pricing as pricing;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "pricing")]
        "pricing",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
