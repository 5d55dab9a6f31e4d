use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Provider used when fallback is disabled
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Recipe API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Fallback configuration for switching to the local catalog
    #[serde(default)]
    pub fallback: FallbackConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            api: ApiConfig::default(),
            fallback: FallbackConfig::default(),
        }
    }
}

/// Configuration for the Spoonacular recipe API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Whether the API provider may be used at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// API key for authentication (can also be set via SPOONACULAR_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the API endpoint (for proxies and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Maximum number of recipes requested from the search endpoint
    #[serde(default = "default_number")]
    pub number: u32,
    /// Search ranking: 1 maximizes used ingredients, 2 minimizes missing ones
    #[serde(default = "default_ranking")]
    pub ranking: u32,
    /// Ignore pantry staples such as water and salt
    #[serde(default = "default_ignore_pantry")]
    pub ignore_pantry: bool,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: None,
            base_url: default_base_url(),
            number: default_number(),
            ranking: default_ranking(),
            ignore_pantry: default_ignore_pantry(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for provider fallback and retry behavior
#[derive(Debug, Deserialize, Clone)]
pub struct FallbackConfig {
    /// Whether fallback is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Order of providers to try (first to last)
    #[serde(default = "default_order")]
    pub order: Vec<String>,
    /// Number of attempts per provider before falling back
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Base delay between attempts in milliseconds, multiplied by the attempt number
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            order: default_order(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "spoonacular".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_number() -> u32 {
    10
}

fn default_ranking() -> u32 {
    2
}

fn default_ignore_pantry() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

fn default_order() -> Vec<String> {
    vec!["spoonacular".to_string(), "local".to_string()]
}

fn default_retry_attempts() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    500
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CORNER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_CORNER__API__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the precedence rules.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_CORNER__FALLBACK__ENABLED
        .add_source(
            Environment::with_prefix("RECIPE_CORNER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
