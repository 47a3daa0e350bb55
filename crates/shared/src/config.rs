//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Vacation policy configuration.
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// How a request's total days must relate to the remaining quota
/// when the request is submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaPolicy {
    /// The requested total must exactly consume the remaining quota.
    ///
    /// This is the reference behavior: a year's vacation is planned down
    /// to the last available day before a request is accepted.
    #[default]
    ExactMatch,
    /// The requested total must not exceed the remaining quota.
    AtMost,
}

/// Vacation policy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Annual day ceiling used when a user has no ledger row for a year.
    #[serde(default = "default_annual_days")]
    pub default_annual_days: i32,
    /// Quota consumption rule applied at submission time.
    #[serde(default)]
    pub quota_policy: QuotaPolicy,
}

fn default_annual_days() -> i32 {
    28
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            default_annual_days: default_annual_days(),
            quota_policy: QuotaPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FERIO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
