//! Metrics collection.
//!
//! # Metrics
//! - `client_ip_resolutions_total` (counter): resolutions by source
//!   (`forwarded_for`, `real_ip`, `peer`, `unknown`)

use metrics::counter;

use crate::resolver::ResolutionSource;

/// Counter name, stable for dashboards.
pub const RESOLUTIONS_TOTAL: &str = "client_ip_resolutions_total";

/// Record one resolution, labelled by the fallback-chain rung that fired.
pub fn record_resolution(source: ResolutionSource) {
    counter!(RESOLUTIONS_TOTAL, "source" => source.as_str()).increment(1);
}
