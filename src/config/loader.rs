//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ResolverConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding the configured trust depth.
pub const ENV_TRUSTED_PROXY_COUNT: &str = "TRUSTED_PROXY_COUNT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {name}={value:?}: expected a non-negative integer")]
    EnvOverride { name: &'static str, value: String },

    #[error("Validation failed: {}", format_errors(.errors))]
    Validation { errors: Vec<ValidationError> },
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// A `TRUSTED_PROXY_COUNT` environment variable, when set, overrides the
/// file value. A non-numeric or negative override is a startup error; it is
/// never tolerated per request.
pub fn load_config(path: &Path) -> Result<ResolverConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: ResolverConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config)?;
    validate_config(&config).map_err(|errors| ConfigError::Validation { errors })?;

    Ok(config)
}

/// Apply environment overrides to an already-parsed configuration.
pub fn apply_env_overrides(config: &mut ResolverConfig) -> Result<(), ConfigError> {
    if let Ok(raw) = env::var(ENV_TRUSTED_PROXY_COUNT) {
        config.trust.trusted_proxy_count = parse_trust_depth(&raw)?;
    }
    Ok(())
}

fn parse_trust_depth(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::EnvOverride {
            name: ENV_TRUSTED_PROXY_COUNT,
            value: raw.to_string(),
        })
}
