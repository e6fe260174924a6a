//! Application configuration management.

use serde::Deserialize;

/// Locale used when a caller does not pick one.
pub const DEFAULT_LOCALE: &str = "en-IN";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Display formatting configuration.
    #[serde(default)]
    pub formatting: FormattingConfig,
}

/// Display formatting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    /// Locale tag used when formatting without an explicit locale.
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later overriding earlier: `config/default`, `config/{RUN_MODE}`,
    /// then `TILLPOINT__*` environment variables
    /// (e.g. `TILLPOINT__FORMATTING__DEFAULT_LOCALE=en-US`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TILLPOINT").separator("__"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        tracing::info!(
            run_mode = %run_mode,
            default_locale = %loaded.formatting.default_locale,
            "Configuration loaded"
        );
        Ok(loaded)
    }
}
