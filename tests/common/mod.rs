//! Shared utilities for integration testing.

use std::net::SocketAddr;

use axum::extract::State;
use axum::http::request::Parts;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use client_identity::{ClientIdentityLayer, ClientIp, RequestMetadata, TrustConfig};

fn app(trust: TrustConfig) -> Router {
    Router::new()
        .route("/ip", get(ip_handler))
        .route("/metadata", get(metadata_handler))
        .layer(ClientIdentityLayer::new(trust.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(trust)
}

async fn ip_handler(ClientIp(ip): ClientIp) -> String {
    ip
}

async fn metadata_handler(
    State(trust): State<TrustConfig>,
    parts: Parts,
) -> Json<RequestMetadata> {
    Json(RequestMetadata::from_parts(&parts, &trust))
}

/// Serve with connect info: the transport address participates in
/// resolution, as in a normal deployment.
pub async fn spawn_app(trust: TrustConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = app(trust).into_make_service_with_connect_info::<SocketAddr>();

    tokio::spawn(async move {
        axum::serve(listener, service).await.unwrap();
    });

    addr
}

/// Serve without connect info: the header-only stage, no transport
/// fallback anywhere in the ladder.
pub async fn spawn_headers_only_app(trust: TrustConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = app(trust).into_make_service();

    tokio::spawn(async move {
        axum::serve(listener, service).await.unwrap();
    });

    addr
}

/// Serve with an upstream request-id layer in front, as a gateway would.
pub async fn spawn_app_with_request_ids(trust: TrustConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = app(trust)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .into_make_service_with_connect_info::<SocketAddr>();

    tokio::spawn(async move {
        axum::serve(listener, service).await.unwrap();
    });

    addr
}

/// Non-pooling client so each test request opens a fresh connection.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
