//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username exceeds maximum length of {0} characters")]
    UsernameTooLong(usize),

    #[error("Username contains invalid character: '{0}'. Only alphanumeric characters, underscores, hyphens and dots are allowed")]
    InvalidUsernameCharacter(char),

    #[error("API key is too short. Minimum length is {0} characters")]
    ApiKeyTooShort(usize),

    #[error("API key cannot contain whitespace")]
    ApiKeyWhitespace,
}

const MAX_USERNAME_LENGTH: usize = 50;
const MIN_API_KEY_LENGTH: usize = 8;

/// Validate a username
///
/// Rules:
/// - Cannot be empty
/// - Maximum 50 characters
/// - Only alphanumeric characters, underscores, hyphens and dots
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooLong(MAX_USERNAME_LENGTH));
    }

    for c in username.chars() {
        if !c.is_ascii_alphanumeric() && c != '_' && c != '-' && c != '.' {
            return Err(UserValidationError::InvalidUsernameCharacter(c));
        }
    }

    Ok(())
}

/// Validate an API key
pub fn validate_api_key(api_key: &str) -> Result<(), UserValidationError> {
    if api_key.len() < MIN_API_KEY_LENGTH {
        return Err(UserValidationError::ApiKeyTooShort(MIN_API_KEY_LENGTH));
    }

    if api_key.chars().any(char::is_whitespace) {
        return Err(UserValidationError::ApiKeyWhitespace);
    }

    Ok(())
}
