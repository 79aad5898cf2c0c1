//! Raw request inputs for the resolver.

use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::{Extensions, HeaderMap};
use tower_http::request_id::RequestId;

use crate::resolver::RequestContext;

/// Header carrying an upstream-assigned request identifier.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Transport-level peer address, when the host application serves with
/// connect info. Absent in header-only stages.
pub fn peer_addr(extensions: &Extensions) -> Option<SocketAddr> {
    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr)
}

/// Previously-attached request identifier: the tower-http extension when a
/// request-id layer ran, else the bare header. Never generated here.
pub fn request_id<'a>(extensions: &'a Extensions, headers: &'a HeaderMap) -> Option<&'a str> {
    extensions
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .or_else(|| headers.get(X_REQUEST_ID).and_then(|v| v.to_str().ok()))
}

/// Assemble the resolver's per-call input from request parts.
pub fn request_context<'a>(
    headers: &'a HeaderMap,
    extensions: &'a Extensions,
) -> RequestContext<'a> {
    RequestContext {
        headers,
        peer_addr: peer_addr(extensions),
        request_id: request_id(extensions, headers),
    }
}
