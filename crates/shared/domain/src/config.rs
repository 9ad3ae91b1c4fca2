use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration of the desktop host.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// Main window geometry and caption.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Tracing subscriber settings.
///
/// Without a `directory` only the console layer is installed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub env_filter: Option<String>,
    pub console: bool,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "FlexiForms Pricing".to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            env_filter: None,
            console: true,
            directory: None,
            json: false,
        }
    }
}
