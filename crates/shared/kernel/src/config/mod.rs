use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variables with this prefix override file values.
pub const ENV_PREFIX: &str = "FLEXIFORMS";
/// Config file stem used when no path is given.
pub const DEFAULT_CONFIG_STEM: &str = "desktop";

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Attaches a human-readable context to config failures.
pub trait ConfigErrorExt<T> {
    /// # Errors
    /// Returns the original error with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> ConfigErrorExt<T> for std::result::Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Defaults**: whatever `T`'s `#[serde(default)]` provides.
/// 2. **Base File**: `path` (any format the `config` crate detects from the
///    extension). Defaults to the `desktop` stem in the working directory. A
///    missing file is not an error; the desktop host must start without one.
/// 3. **Environment Overrides**: variables prefixed with `FLEXIFORMS__`, nested
///    keys separated by double underscores (`FLEXIFORMS__WINDOW__WIDTH` maps to
///    `window.width`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an existing file cannot be parsed or the
/// merged values do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use flexiforms_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct AppConfig {
///     width: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T>
where
    T: DeserializeOwned,
{
    load_layered(path, None)
}

/// Builds the layered config; `env` replaces the process environment when set.
fn load_layered<T>(path: Option<impl AsRef<Path>>, env: Option<Map<String, String>>) -> Result<T>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_STEM), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(env_overrides(env));

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

fn env_overrides(source: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .convert_case(config::Case::Snake)
        .source(source)
}
