use crate::error::{ConfigError, Result as ConfigErrorResult};
use crate::log_level::LogLevel;

use std::net::SocketAddr;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use log::info;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// SQLite connection string, e.g. `sqlite://notes.db`
    pub database_url: String,

    /// Symmetric JWT signing secret (HS256)
    pub jwt_secret: String,

    /// Issuer claim stamped into and required of every token
    pub jwt_issuer: String,

    /// Audience claim stamped into and required of every token
    pub jwt_audience: String,

    /// Token lifetime in days (default: 7)
    pub token_ttl_days: i64,

    /// bcrypt work factor (default: 12)
    pub bcrypt_cost: u32,

    /// Log level (default: info)
    pub log_level: LogLevel,

    /// Enable colored logs (default: true)
    pub log_colored: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing `DATABASE_URL` or `JWT_SECRET` is fatal here, not at
    /// request time.
    pub fn from_env() -> ConfigErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| crate::DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidVar {
                name: "BIND_ADDR",
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let database_url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar {
            name: "DATABASE_URL",
        })?;

        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| ConfigError::MissingVar { name: "JWT_SECRET" })?;

        let config = Self {
            bind_addr,
            database_url,
            jwt_secret,

            jwt_issuer: std::env::var("JWT_ISSUER")
                .unwrap_or_else(|_| crate::DEFAULT_JWT_ISSUER.to_string()),

            jwt_audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| crate::DEFAULT_JWT_AUDIENCE.to_string()),

            token_ttl_days: std::env::var("TOKEN_TTL_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(crate::DEFAULT_TOKEN_TTL_DAYS),

            bcrypt_cost: std::env::var("BCRYPT_COST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(crate::DEFAULT_BCRYPT_COST),

            log_level: std::env::var("LOG_LEVEL")
                .ok()
                .and_then(|s| LogLevel::from_str(&s).ok())
                .unwrap_or(LogLevel(crate::DEFAULT_LOG_LEVEL)),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration beyond mere presence
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingVar {
                name: "DATABASE_URL",
            });
        }

        if self.jwt_secret.len() < crate::MIN_JWT_SECRET_BYTES {
            return Err(ConfigError::InvalidVar {
                name: "JWT_SECRET",
                message: format!(
                    "secret must be at least {} bytes, got {}",
                    crate::MIN_JWT_SECRET_BYTES,
                    self.jwt_secret.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // bcrypt only accepts work factors in this range
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidVar {
                name: "BCRYPT_COST",
                message: format!("cost must be in 4..=31, got {}", self.bcrypt_cost),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.token_ttl_days < 1 {
            return Err(ConfigError::InvalidVar {
                name: "TOKEN_TTL_DAYS",
                message: format!("lifetime must be at least 1 day, got {}", self.token_ttl_days),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Log the effective configuration. Never logs the signing secret.
    pub fn log_summary(&self) {
        info!("Bind address: {}", self.bind_addr);
        info!("Database: {}", self.database_url);
        info!(
            "JWT: issuer={}, audience={}, ttl={}d, secret=<set, {} bytes>",
            self.jwt_issuer,
            self.jwt_audience,
            self.token_ttl_days,
            self.jwt_secret.len()
        );
        info!("bcrypt cost: {}", self.bcrypt_cost);
    }
}
