//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address parses)
//! - Check a redirect document's format can be determined
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ShortenerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system
//! - Redirect paths and target URLs are not checked; an unusable path simply
//!   never matches

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::schema::ShortenerConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("observability.log_format {0:?} is not one of \"pretty\", \"json\"")]
    LogFormat(String),

    #[error("cannot infer format of redirect document {0:?}; set redirects.format")]
    DocumentFormat(PathBuf),
}

pub fn validate_config(config: &ShortenerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    match config.observability.log_format.as_str() {
        "pretty" | "json" => {}
        other => errors.push(ValidationError::LogFormat(other.to_string())),
    }

    if let Some((path, None)) = config.redirects.document_source() {
        errors.push(ValidationError::DocumentFormat(path.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
