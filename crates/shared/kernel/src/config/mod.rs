use crate::error::format_context;
use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default configuration file stem, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "taco";
/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "TACO";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `taco.toml`) if it exists. If no path is
///    provided, it defaults to `"taco"`; the extension is probed by the `config` crate.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `TACO__`.
///    Nested structures are accessed using double underscores (e.g., `TACO__SERVER__PORT` maps to `server.port`).
///
/// # Errors
/// This function will return an error if:
/// * The file exists but cannot be parsed.
/// * The merged content does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use taco_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, None)
}

/// Same as [`load_config`], but environment overrides are read from `vars`
/// instead of the process environment.
///
/// Only `TACO__`-prefixed keys are considered, exactly as with real variables.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T, I>(
    path: Option<impl AsRef<Path>>,
    vars: I,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    load_layered(path, Some(vars.into_iter().collect()))
}

fn load_layered<T>(
    path: Option<impl AsRef<Path>>,
    vars: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .source(vars),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .map_err(|source| ConfigError::Config {
            source,
            context: Some("Failed to build config".into()),
        })?
        .try_deserialize::<T>()
        .map_err(|source| ConfigError::Config {
            source,
            context: Some("Failed to deserialize config".into()),
        })?;

    Ok(config)
}
