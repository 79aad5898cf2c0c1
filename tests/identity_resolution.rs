//! End-to-end client identity resolution through a live axum server.

use client_identity::TrustConfig;

mod common;

fn trust(depth: u32) -> TrustConfig {
    TrustConfig {
        trusted_proxy_count: depth,
    }
}

#[tokio::test]
async fn test_forwarded_chain_behind_one_trusted_hop() {
    let addr = common::spawn_app(trust(1)).await;

    let body = common::client()
        .get(format!("http://{addr}/ip"))
        .header("X-Forwarded-For", "1.2.3.4, 10.0.0.1, 10.0.0.2")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body, "10.0.0.1");
}

#[tokio::test]
async fn test_short_chain_falls_back_to_outermost() {
    let addr = common::spawn_app(trust(2)).await;

    let body = common::client()
        .get(format!("http://{addr}/ip"))
        .header("X-Forwarded-For", "1.2.3.4")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body, "1.2.3.4");
}

#[tokio::test]
async fn test_zero_trust_spoofed_headers_are_inert() {
    let addr = common::spawn_app(trust(0)).await;

    let body = common::client()
        .get(format!("http://{addr}/ip"))
        .header("X-Forwarded-For", "6.6.6.6, 6.6.6.7")
        .header("X-Real-IP", "6.6.6.8")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    // The connection address is authoritative, whatever the headers claim.
    assert_eq!(body, "127.0.0.1");
}

#[tokio::test]
async fn test_peer_address_when_no_forwarding_headers() {
    let addr = common::spawn_app(trust(3)).await;

    let body = common::client()
        .get(format!("http://{addr}/ip"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body, "127.0.0.1");
}

#[tokio::test]
async fn test_real_ip_wins_when_chain_absent() {
    let addr = common::spawn_app(trust(2)).await;

    let body = common::client()
        .get(format!("http://{addr}/ip"))
        .header("X-Real-IP", "9.9.9.9")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body, "9.9.9.9");
}

#[tokio::test]
async fn test_headers_only_stage_zero_trust_is_sentinel() {
    let addr = common::spawn_headers_only_app(trust(0)).await;

    let body = common::client()
        .get(format!("http://{addr}/ip"))
        .header("X-Forwarded-For", "1.2.3.4")
        .header("X-Real-IP", "9.9.9.9")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    // No transport fallback exists here: never a best-effort address.
    assert_eq!(body, "unknown");
}

#[tokio::test]
async fn test_headers_only_stage_still_resolves_chains() {
    let addr = common::spawn_headers_only_app(trust(1)).await;

    let body = common::client()
        .get(format!("http://{addr}/ip"))
        .header("X-Forwarded-For", "1.2.3.4, 10.0.0.1, 10.0.0.2")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body, "10.0.0.1");
}

#[tokio::test]
async fn test_metadata_aggregation() {
    let addr = common::spawn_app(trust(1)).await;

    let metadata: serde_json::Value = common::client()
        .get(format!("http://{addr}/metadata?stream=true"))
        .header("X-Forwarded-For", "1.2.3.4, 10.0.0.1")
        .header("User-Agent", "integration-test/1.0")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(metadata["client_ip"], "1.2.3.4");
    assert_eq!(metadata["user_agent"], "integration-test/1.0");
    assert_eq!(metadata["method"], "GET");
    assert_eq!(metadata["path"], "/metadata");
    assert_eq!(metadata["query"], "stream=true");
}

#[tokio::test]
async fn test_request_id_attached_upstream_is_surfaced() {
    let addr = common::spawn_app_with_request_ids(trust(0)).await;

    let metadata: serde_json::Value = common::client()
        .get(format!("http://{addr}/metadata"))
        .header("X-Request-ID", "req-42")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // The upstream layer keeps a client-supplied id.
    assert_eq!(metadata["request_id"], "req-42");
}

#[tokio::test]
async fn test_request_id_generated_upstream_is_surfaced() {
    let addr = common::spawn_app_with_request_ids(trust(0)).await;

    let metadata: serde_json::Value = common::client()
        .get(format!("http://{addr}/metadata"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let id = metadata["request_id"].as_str().unwrap();
    assert!(!id.is_empty());
}

#[tokio::test]
async fn test_repeated_requests_resolve_identically() {
    let addr = common::spawn_app(trust(1)).await;
    let client = common::client();

    let mut results = Vec::new();
    for _ in 0..3 {
        let body = client
            .get(format!("http://{addr}/ip"))
            .header("X-Forwarded-For", "1.2.3.4, 10.0.0.1")
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        results.push(body);
    }

    assert!(results.iter().all(|r| r == "1.2.3.4"));
}
