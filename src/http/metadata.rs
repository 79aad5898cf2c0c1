//! Per-request metadata aggregation.

use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use serde::Serialize;

use crate::config::schema::TrustConfig;
use crate::http::context;
use crate::resolver::resolve_client_ip;

/// Read-only composition of the resolved client address with the request
/// fields consumed by logging and usage accounting. Built once per request,
/// then discarded; pure passthrough with no decision logic.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestMetadata {
    pub client_ip: String,
    /// `"unknown"` when the client sent no User-Agent.
    pub user_agent: String,
    /// Upstream-assigned identifier; absent stays absent, no sentinel.
    pub request_id: Option<String>,
    pub method: String,
    pub path: String,
    /// Absent when the query string is empty.
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub content_length: Option<String>,
}

impl RequestMetadata {
    /// Aggregate metadata from request parts, resolving the client address
    /// through the full-context fallback chain.
    pub fn from_parts(parts: &Parts, trust: &TrustConfig) -> Self {
        let ctx = context::request_context(&parts.headers, &parts.extensions);
        let client_ip = resolve_client_ip(&ctx, trust);

        Self {
            client_ip,
            user_agent: header_string(&parts.headers, USER_AGENT.as_str())
                .unwrap_or_else(|| "unknown".to_string()),
            request_id: ctx.request_id.map(str::to_string),
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            query: parts
                .uri
                .query()
                .filter(|q| !q.is_empty())
                .map(str::to_string),
            content_type: header_string(&parts.headers, CONTENT_TYPE.as_str()),
            content_length: header_string(&parts.headers, CONTENT_LENGTH.as_str()),
        }
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
