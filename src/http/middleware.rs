//! Tower middleware resolving client identity once per request.

use std::task::{Context, Poll};

use axum::http::Request;
use tower::{Layer, Service};

use crate::config::schema::TrustConfig;
use crate::http::context;
use crate::http::extract::ClientIp;
use crate::observability::metrics;
use crate::resolver::resolve::resolve;

/// Layer holding the immutable trust configuration.
///
/// Install it on a router (with
/// `into_make_service_with_connect_info::<SocketAddr>()` when the transport
/// address should participate in resolution); handlers then extract
/// [`ClientIp`]. Without connect info the layer operates in the header-only
/// mode: trust depth 0 yields the `"unknown"` sentinel, never a best-effort
/// address.
#[derive(Debug, Clone)]
pub struct ClientIdentityLayer {
    trust: TrustConfig,
}

impl ClientIdentityLayer {
    pub fn new(trust: TrustConfig) -> Self {
        Self { trust }
    }
}

impl<S> Layer<S> for ClientIdentityLayer {
    type Service = ClientIdentityService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ClientIdentityService {
            inner,
            trust: self.trust.clone(),
        }
    }
}

/// Resolves the client address, stores it in request extensions, and passes
/// the request through. Never rejects, never short-circuits.
#[derive(Debug, Clone)]
pub struct ClientIdentityService<S> {
    inner: S,
    trust: TrustConfig,
}

impl<S, B> Service<Request<B>> for ClientIdentityService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        let peer_addr = context::peer_addr(request.extensions());
        let (ip, source) = resolve(
            request.headers(),
            peer_addr,
            self.trust.trusted_proxy_count,
        );

        metrics::record_resolution(source);
        tracing::debug!(
            client_ip = %ip,
            source = source.as_str(),
            "Resolved client identity"
        );

        request.extensions_mut().insert(ClientIp(ip));
        self.inner.call(request)
    }
}
