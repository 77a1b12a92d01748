use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL the endpoint templates are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (unset: transport default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_user_agent() -> String {
    format!("recipe-finder/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. recipes.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Configured request timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Same configuration pointed at another service root (used by tests and proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: RECIPES__BASE_URL, RECIPES__TIMEOUT_SECS
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipes").required(false))
        .add_source(
            Environment::with_prefix("RECIPES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
