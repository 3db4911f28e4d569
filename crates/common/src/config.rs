//! Application configuration.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Admin authentication configuration.
    pub admin: AdminConfig,
    /// Outbound mail configuration.
    #[serde(default)]
    pub mail: MailConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Public URL of this site, used in notification email links.
    pub url: String,
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Admin authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Password checked by the admin login endpoint.
    pub password: String,
}

/// Outbound mail configuration.
///
/// When `api_key` or `notification_email` is absent, notification sends
/// degrade to logged no-ops.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MailConfig {
    /// Resend API key.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Operator address that receives notifications.
    #[serde(default)]
    pub notification_email: Option<String>,
    /// From address for outgoing notifications.
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_max_connections() -> u32 {
    20
}

const fn default_min_connections() -> u32 {
    2
}

fn default_from_address() -> String {
    "Folio <onboarding@resend.dev>".to_string()
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `FOLIO_ENV`)
    /// 3. Environment variables with `FOLIO_` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = std::env::var("FOLIO_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
