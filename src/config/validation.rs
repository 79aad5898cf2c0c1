//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (trust depth cap, recognized log levels)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ResolverConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::ResolverConfig;

/// Upper bound on the configurable trust depth. Real deployments sit at a
/// handful of hops; anything past this is a typo, not a topology.
pub const MAX_TRUSTED_PROXY_COUNT: u32 = 64;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic configuration problem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("trust.trusted_proxy_count is {0}, maximum supported is {MAX_TRUSTED_PROXY_COUNT}")]
    TrustedProxyCountTooLarge(u32),

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &ResolverConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.trust.trusted_proxy_count > MAX_TRUSTED_PROXY_COUNT {
        errors.push(ValidationError::TrustedProxyCountTooLarge(
            config.trust.trusted_proxy_count,
        ));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
