//! Service configuration - environment loading with documented defaults
//!
//! Configuration is loaded once at startup from environment variables:
//! - `DB_HOST`: store host (default: localhost)
//! - `DB_PORT`: store port (default: 5432)
//! - `DB_NAME`: database name (default: todoapp)
//! - `DB_USER` / `DB_PASSWORD`: credentials (default: postgres / postgres)
//! - `DB_MAX_CONNECTIONS`: pool size (default: 10)
//! - `DATABASE_URL`: full connection string, overrides the `DB_*` fields when set
//! - `LISTEN_HOST` / `PORT`: HTTP bind address (default: 0.0.0.0:3000)
//! - `CORS_PERMISSIVE`: allow any origin (default: false)
//!
//! Missing or empty variables fall back to the default. A variable that is
//! present but cannot be parsed is a [`ConfigError`].

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_NAME: &str = "todoapp";
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_PASSWORD: &str = "postgres";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_LISTEN_PORT: u16 = 3000;

/// Configuration error, reported once at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

/// Relational store connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    /// Full connection string; takes precedence over the discrete fields
    pub url: Option<String>,
}

impl DatabaseConfig {
    /// Build sqlx connect options from this configuration.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match &self.url {
            Some(url) => PgConnectOptions::from_str(url).map_err(ConfigError::DatabaseUrl),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .database(&self.name)
                .username(&self.user)
                .password(&self.password)),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            name: DEFAULT_DB_NAME.to_string(),
            user: DEFAULT_DB_USER.to_string(),
            password: DEFAULT_DB_PASSWORD.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            url: None,
        }
    }
}

// Credentials never reach the logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// HTTP transport settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_LISTEN_PORT),
            cors_permissive: false,
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup (for testing).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = DatabaseConfig {
            host: get("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            port: parse_or(get("DB_PORT"), "DB_PORT", DEFAULT_DB_PORT)?,
            name: get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            user: get("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
            password: get("DB_PASSWORD").unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_string()),
            max_connections: parse_or(
                get("DB_MAX_CONNECTIONS"),
                "DB_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            url: get("DATABASE_URL"),
        };

        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        // Parse the URL now so a typo fails startup rather than the first connect.
        database.connect_options()?;

        let host: IpAddr = parse_or(
            get("LISTEN_HOST"),
            "LISTEN_HOST",
            IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        )?;
        let port = parse_or(get("PORT"), "PORT", DEFAULT_LISTEN_PORT)?;
        let cors_permissive = match get("CORS_PERMISSIVE") {
            Some(value) => parse_flag("CORS_PERMISSIVE", &value)?,
            None => false,
        };

        Ok(Self {
            database,
            server: ServerConfig {
                bind_addr: SocketAddr::new(host, port),
                cors_permissive,
            },
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value {
        Some(raw) => {
            let parsed = raw.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                key,
                value: raw,
                reason: e.to_string(),
            })
        }
        None => Ok(default),
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
