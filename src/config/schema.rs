//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! resolver. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

/// Root configuration for client identity resolution.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ResolverConfig {
    /// Proxy trust settings.
    pub trust: TrustConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Proxy trust configuration.
///
/// Loaded once at process start and never mutated afterwards; every
/// resolution call reads it, none writes it.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TrustConfig {
    /// Number of proxy hops this deployment controls and trusts to append
    /// correct forwarding entries.
    ///
    /// 0 means no proxy is trusted: forwarding headers are never read and
    /// the connection address is authoritative. Deployments exposed
    /// directly to the public internet must keep this at 0 to prevent
    /// address spoofing.
    pub trusted_proxy_count: u32,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
