use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {name}")]
    MissingVar { name: &'static str },

    #[error("Invalid value for {name}: {message} {location}")]
    InvalidVar {
        name: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, ConfigError>;
