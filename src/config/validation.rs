//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Refuse to start without an explicit allow-list
//! - Validate value ranges (port, timeouts)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServeConfig → Result<(), Vec<ValidationError>>
//! - Runs before any socket is bound

use thiserror::Error;

use crate::config::schema::ServeConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no allowed addresses configured; pass at least one --allow")]
    EmptyAllowList,

    #[error("allow-list entry {index} is blank")]
    BlankAllowEntry { index: usize },

    #[error("listener port must be non-zero")]
    ZeroPort,

    #[error("request timeout must be non-zero")]
    ZeroRequestTimeout,
}

/// Check a configuration before it is accepted.
pub fn validate_config(config: &ServeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.allow.is_empty() {
        errors.push(ValidationError::EmptyAllowList);
    }
    for (index, entry) in config.allow.iter().enumerate() {
        if entry.trim().is_empty() {
            errors.push(ValidationError::BlankAllowEntry { index });
        }
    }
    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Render a list of errors as one comma-separated line.
pub fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
