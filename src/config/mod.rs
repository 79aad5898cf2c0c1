//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (TRUSTED_PROXY_COUNT env override)
//!     → validation.rs (semantic checks)
//!     → ResolverConfig (validated, immutable)
//!     → injected into the resolver/middleware at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no runtime reload path
//! - All fields have defaults to allow minimal configs
//! - The default trust depth is 0: forwarding headers start out inert
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ObservabilityConfig, ResolverConfig, TrustConfig};
