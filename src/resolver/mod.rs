//! Client identity resolution.
//!
//! # Data Flow
//! ```text
//! Resolution request (headers + optional peer address):
//!     → resolve.rs (fallback chain, trust-depth gate)
//!     → chain.rs (parse X-Forwarded-For into ordered tokens)
//!     → trust.rs (select the entry the client cannot forge past)
//!     → single address string, or "unknown"
//! ```
//!
//! # Design Decisions
//! - Trust depth 0 makes forwarding headers completely inert
//! - Resolution is total: every input combination has a defined output
//! - No cross-request state; every call is a pure function of its inputs
//! - Tokens are passed through unvalidated; address syntax is not our concern

pub mod chain;
pub mod resolve;
pub mod trust;

pub use chain::parse_chain;
pub use resolve::{
    resolve_client_ip, resolve_from_headers, RequestContext, ResolutionSource, UNKNOWN_CLIENT,
    X_FORWARDED_FOR, X_REAL_IP,
};
pub use trust::select_client;
