//! Kernel utilities shared across slices.
//! Keep this crate lightweight; today it only owns layered config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use flexiforms_kernel::config::load_config;
//! use flexiforms_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("desktop")).unwrap();
//! println!("{}", cfg.window.title);
//! ```

pub mod config;

pub use flexiforms_domain as domain;
