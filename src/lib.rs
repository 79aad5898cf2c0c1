//! Trusted-proxy client identity resolution for axum services.
//!
//! Determines the real originating address of an inbound HTTP request that
//! may have crossed zero or more trusted reverse proxies, without being
//! deceived by forged forwarding headers.
//!
//! # Architecture Overview
//!
//! ```text
//!  Incoming request
//!      │
//!      ▼
//!  ┌──────────────────┐   ConnectInfo / headers   ┌─────────────────────┐
//!  │ ClientIdentity   │──────────────────────────▶│ resolver            │
//!  │ Layer (tower)    │                           │  fallback chain     │
//!  └────────┬─────────┘                           │   → chain parser    │
//!           │ ClientIp extension                  │   → depth selector  │
//!           ▼                                     └─────────────────────┘
//!  ┌──────────────────┐
//!  │ handlers         │  ClientIp extractor, RequestMetadata aggregation
//!  └──────────────────┘
//!
//!  Cross-cutting: config (trust depth, immutable after startup),
//!  observability (tracing events, resolution counters)
//! ```
//!
//! The number of trusted proxy hops is configured once at startup
//! ([`TrustConfig`]) and injected into every resolution call; with a trust
//! depth of zero, forwarding headers are never read at all.

// Core subsystems
pub mod http;
pub mod resolver;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::schema::{ResolverConfig, TrustConfig};
pub use http::extract::ClientIp;
pub use http::metadata::RequestMetadata;
pub use http::middleware::ClientIdentityLayer;
pub use resolver::{resolve_client_ip, resolve_from_headers, RequestContext, UNKNOWN_CLIENT};
