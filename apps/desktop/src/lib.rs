use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use flexiforms::domain::config::WindowConfig;
use flexiforms::pricing::STYLESHEET;

const VIEWPORT_META: &str =
    r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(window: &WindowConfig) -> Self {
        Self { title: window.title.clone(), width: window.width, height: window.height }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Markup injected into the document head: viewport meta plus the pricing stylesheet.
    #[must_use]
    pub fn custom_head() -> String {
        format!("{VIEWPORT_META}<style>{STYLESHEET}</style>")
    }

    /// The entry point for launching the app
    pub fn launch(self, root: fn() -> Element) {
        tracing::info!(
            title = %self.title,
            width = self.width,
            height = self.height,
            "Launching desktop window"
        );

        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(Self::custom_head());

        LaunchBuilder::desktop().with_cfg(cfg).launch(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_window_config() {
        let app = DesktopApp::new();
        assert_eq!(app.title(), "FlexiForms Pricing");
        assert_eq!(app.size(), (1200.0, 800.0));
    }

    #[test]
    fn builder_overrides() {
        let app = DesktopApp::new().with_title("Plans").with_size(640.0, 480.0);
        assert_eq!(app.title(), "Plans");
        assert_eq!(app.size(), (640.0, 480.0));
    }

    #[test]
    fn head_carries_stylesheet() {
        let head = DesktopApp::custom_head();
        assert!(head.starts_with("<meta name=\"viewport\""));
        assert!(head.contains(".pricing-card.featured"));
        assert!(head.ends_with("</style>"));
    }
}
