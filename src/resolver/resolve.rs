//! Header fallback chain: the authoritative resolution entry point.

use std::net::SocketAddr;

use axum::http::HeaderMap;

use crate::config::schema::TrustConfig;
use crate::resolver::chain::parse_chain;
use crate::resolver::trust::select_client;

/// Forwarding-chain header appended to by each proxy hop, outermost first.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Single-value forwarding header, typically set by an nginx tier.
pub const X_REAL_IP: &str = "x-real-ip";

/// Sentinel returned when no client address can be determined.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Per-call resolution input. Borrowed from the request, never stored.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    /// Case-insensitive header lookup.
    pub headers: &'a HeaderMap,
    /// Transport-level peer address, when the caller has a connection.
    /// Absent in header-only stages (e.g. pre-connection middleware).
    pub peer_addr: Option<SocketAddr>,
    /// Identifier attached upstream, if any. Read, never generated here.
    pub request_id: Option<&'a str>,
}

/// Which rung of the fallback chain produced the address.
///
/// Observability detail only; the resolved value itself carries no
/// provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    ForwardedFor,
    RealIp,
    Peer,
    Unknown,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionSource::ForwardedFor => "forwarded_for",
            ResolutionSource::RealIp => "real_ip",
            ResolutionSource::Peer => "peer",
            ResolutionSource::Unknown => "unknown",
        }
    }
}

/// Resolve the client address for a live request.
///
/// With trust depth 0 the forwarding headers are never read: the peer
/// address (or [`UNKNOWN_CLIENT`]) is returned unconditionally. Otherwise
/// the sources are consulted in order: `X-Forwarded-For` through the
/// trust-depth selector, then `X-Real-IP`, then the peer address, then the
/// sentinel.
pub fn resolve_client_ip(ctx: &RequestContext<'_>, trust: &TrustConfig) -> String {
    resolve(ctx.headers, ctx.peer_addr, trust.trusted_proxy_count).0
}

/// Resolve the client address from a bare header map.
///
/// Identical ladder to [`resolve_client_ip`], except there is no transport
/// fallback: every rung that would consult the peer address yields
/// [`UNKNOWN_CLIENT`] instead. In particular, trust depth 0 always yields
/// the sentinel here, never a best-effort address.
pub fn resolve_from_headers(headers: &HeaderMap, trust: &TrustConfig) -> String {
    resolve(headers, None, trust.trusted_proxy_count).0
}

/// Shared fallback chain; both public variants differ only in whether a
/// transport address exists as the terminal fallback.
pub(crate) fn resolve(
    headers: &HeaderMap,
    peer_addr: Option<SocketAddr>,
    trusted_proxy_count: u32,
) -> (String, ResolutionSource) {
    // Zero trust: headers are inert, no matter their content.
    if trusted_proxy_count == 0 {
        return peer_fallback(peer_addr);
    }

    if let Some(raw) = header_str(headers, X_FORWARDED_FOR) {
        let chain = parse_chain(raw);
        if !chain.is_empty() {
            return (
                select_client(&chain, trusted_proxy_count),
                ResolutionSource::ForwardedFor,
            );
        }
    }

    if let Some(raw) = header_str(headers, X_REAL_IP) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return (trimmed.to_string(), ResolutionSource::RealIp);
        }
    }

    peer_fallback(peer_addr)
}

fn peer_fallback(peer_addr: Option<SocketAddr>) -> (String, ResolutionSource) {
    match peer_addr {
        Some(addr) => (addr.ip().to_string(), ResolutionSource::Peer),
        None => (UNKNOWN_CLIENT.to_string(), ResolutionSource::Unknown),
    }
}

/// Header lookup as UTF-8. Non-UTF-8 values are treated as absent.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
