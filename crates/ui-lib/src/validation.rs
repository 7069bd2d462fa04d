// ============================
// crates/ui-lib/src/validation.rs
// ============================
//! Inbound message validation.

use neverpass_common::ClientToServer;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// Common validation constants
const MAX_INPUT_LENGTH: usize = 256;
const MAX_PATH_LENGTH: usize = 64;

// Route paths are plain slash-separated segments, no query strings or escapes
static PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/[a-zA-Z0-9/_-]*$").unwrap());

/// Possible validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Input too long: {0} characters exceeds the {MAX_INPUT_LENGTH} limit")]
    InputTooLong(usize),
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a navigation path
pub fn validate_path(path: &str) -> ValidationResult<&str> {
    if path.is_empty() || path.len() > MAX_PATH_LENGTH {
        return Err(ValidationError::InvalidPath(
            "Path must be between 1 and 64 characters".to_string(),
        ));
    }

    if !PATH_REGEX.is_match(path) {
        return Err(ValidationError::InvalidPath(
            "Path must start with / and contain only alphanumerics, /, _ or -".to_string(),
        ));
    }

    Ok(path)
}

/// Validate a form field value. The rule engine is happy to evaluate any
/// text; the cap only bounds the work a single frame can cause.
pub fn validate_input(value: &str) -> ValidationResult<&str> {
    let length = value.chars().count();
    if length > MAX_INPUT_LENGTH {
        return Err(ValidationError::InputTooLong(length));
    }

    Ok(value)
}

/// Validate a client message before it reaches the session
pub fn validate_client_message(msg: &ClientToServer) -> ValidationResult<()> {
    match msg {
        ClientToServer::Navigate { path } => {
            validate_path(path)?;
        },
        ClientToServer::LoginInput { value, .. } | ClientToServer::RecoveryInput { value } => {
            validate_input(value)?;
        },
        ClientToServer::LoginSubmit | ClientToServer::RecoverySubmit => {},
    }

    Ok(())
}
