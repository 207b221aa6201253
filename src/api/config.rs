//! Environment-driven configuration for the API server.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8081;

/// Which storage backend the server should use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// PostgreSQL at the given connection URL
    Postgres(String),
    /// SQLite database file
    Sqlite(PathBuf),
    Memory,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    pub storage: StorageConfig,
    /// Allowed CORS origins; empty means permissive
    pub cors_allowed_origins: Vec<String>,
    /// Requests per minute across the server; `None` disables limiting
    pub rate_limit_per_minute: Option<u32>,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            storage: StorageConfig::Memory,
            cors_allowed_origins: Vec::new(),
            rate_limit_per_minute: None,
            log_format: LogFormat::Text,
        }
    }
}

impl ApiConfig {
    /// Read configuration from the process environment.
    ///
    /// `DATABASE_URL` takes precedence over `SQLITE_PATH`; with neither set the
    /// server keeps diagrams in memory. Unparseable numeric values fall back to
    /// their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_address = non_empty_var("BIND_ADDRESS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.bind_address);
        let port = non_empty_var("PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let storage = if let Some(url) = non_empty_var("DATABASE_URL") {
            StorageConfig::Postgres(url)
        } else if let Some(path) = non_empty_var("SQLITE_PATH") {
            StorageConfig::Sqlite(PathBuf::from(path))
        } else {
            StorageConfig::Memory
        };

        let cors_allowed_origins = non_empty_var("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let rate_limit_per_minute = non_empty_var("RATE_LIMIT_PER_MINUTE")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&n| n > 0);

        let log_format = match non_empty_var("LOG_FORMAT").as_deref() {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            bind_address,
            port,
            storage,
            cors_allowed_origins,
            rate_limit_per_minute,
            log_format,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
