//! Per-client rate limiting for the login page.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Replenish one request every this many milliseconds.
const LOGIN_REPLENISH_MS: u64 = 500;

/// Requests a client may send back to back before being throttled.
const LOGIN_BURST: u32 = 20;

/// Creates the rate limiter guarding `/login`.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 20 requests
///
/// Page loads and submissions share the bucket, which bounds how fast a
/// single client can try passwords through this page. Requests exceeding the
/// limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Keyed by the socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn login_layer()
-> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(LOGIN_REPLENISH_MS)
            .burst_size(LOGIN_BURST)
            .finish()
            .expect("rate limit constants are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
