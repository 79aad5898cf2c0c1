//! Axum extractor for the resolved client address.

use std::convert::Infallible;
use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::http::context;
use crate::resolver;

/// Resolved client address, inserted into request extensions by
/// [`ClientIdentityLayer`](crate::http::middleware::ClientIdentityLayer) and
/// extractable in any handler.
///
/// When the layer is not installed, extraction falls back to the zero-trust
/// posture: the connection address if present, otherwise `"unknown"`.
/// Forwarding headers are never consulted on that path, so a missing layer
/// can only under-trust, never over-trust.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl fmt::Display for ClientIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(ip) = parts.extensions.get::<ClientIp>() {
            return Ok(ip.clone());
        }

        let peer = context::peer_addr(&parts.extensions);
        let (ip, _) = resolver::resolve::resolve(&parts.headers, peer, 0);
        Ok(ClientIp(ip))
    }
}
