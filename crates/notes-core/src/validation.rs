//! Request field limits, enforced at the transport boundary before any
//! service runs.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_CONTENT_LEN: usize = 10_000;
pub const MAX_USERNAME_LEN: usize = 50;
pub const MAX_EMAIL_LEN: usize = 255;
pub const MIN_PASSWORD_LEN: usize = 8;

#[track_caller]
pub fn validate_title(title: &str) -> CoreErrorResult<()> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation {
            field: "title",
            message: "Title is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation {
            field: "title",
            message: format!("Title must not exceed {} characters", MAX_TITLE_LEN),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

#[track_caller]
pub fn validate_content(content: &str) -> CoreErrorResult<()> {
    // Content may be empty
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(CoreError::Validation {
            field: "content",
            message: format!("Content must not exceed {} characters", MAX_CONTENT_LEN),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

#[track_caller]
pub fn validate_username(username: &str) -> CoreErrorResult<()> {
    if username.trim().is_empty() {
        return Err(CoreError::Validation {
            field: "username",
            message: "Username is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(CoreError::Validation {
            field: "username",
            message: format!("Username must not exceed {} characters", MAX_USERNAME_LEN),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    if email.trim().is_empty() {
        return Err(CoreError::Validation {
            field: "email",
            message: "Email is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if !email.contains('@') || email.chars().count() > MAX_EMAIL_LEN {
        return Err(CoreError::Validation {
            field: "email",
            message: "A valid email address is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreErrorResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation {
            field: "password",
            message: format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
