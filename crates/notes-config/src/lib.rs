mod config;
mod error;
mod log_level;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use log_level::LogLevel;


const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_JWT_ISSUER: &str = "notes-api";
const DEFAULT_JWT_AUDIENCE: &str = "notes-api";
const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;
const DEFAULT_BCRYPT_COST: u32 = 12;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Symmetric signing secrets below this length are rejected at startup.
const MIN_JWT_SECRET_BYTES: usize = 32;
