//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Middleware and resolver produce:
//!     → logging.rs (structured trace events)
//!     → metrics.rs (resolution-source counters)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//!     → Whatever metrics recorder the host application installs
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event; no string interpolation
//! - Metrics go through the `metrics` facade; installing an exporter is the
//!   embedding application's decision, not this library's
//! - A failed resolution is a data-quality fact to record, never an error

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
