//! HTTP framework integration subsystem.
//!
//! # Data Flow
//! ```text
//! axum request
//!     → middleware.rs (resolve once, insert ClientIp extension)
//!     → extract.rs (handlers pull ClientIp out again)
//!     → metadata.rs (full request record for logging/accounting)
//!
//! context.rs supplies the raw inputs: peer address from ConnectInfo,
//! request id from the tower-http extension or header.
//! ```
//!
//! # Design Decisions
//! - The middleware never rejects or short-circuits a request
//! - Resolution happens once per request; everything downstream reads
//!   the extension
//! - Request IDs are read, never generated; generation stays upstream

pub mod context;
pub mod extract;
pub mod metadata;
pub mod middleware;

pub use extract::ClientIp;
pub use metadata::RequestMetadata;
pub use middleware::{ClientIdentityLayer, ClientIdentityService};
