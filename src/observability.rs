use std::net::SocketAddr;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: total HTTP requests handled. Labels: route, status.
pub const REQUESTS_TOTAL: &str = "classbook_requests_total";

/// Histogram: request latency in seconds. Labels: route.
pub const REQUEST_DURATION_SECONDS: &str = "classbook_request_duration_seconds";

/// Counter: requests rejected before reaching the core. Labels: route.
pub const INVALID_BODIES_TOTAL: &str = "classbook_invalid_bodies_total";

// ── Domain metrics ──────────────────────────────────────────────

/// Counter: classes admitted.
pub const CLASSES_CREATED_TOTAL: &str = "classbook_classes_created_total";

/// Counter: bookings admitted.
pub const BOOKINGS_CREATED_TOTAL: &str = "classbook_bookings_created_total";

/// Counter: form validation failures. Labels: route.
pub const VALIDATION_FAILURES_TOTAL: &str = "classbook_validation_failures_total";

/// Counter: domain-rule rejections. Labels: route, reason.
pub const REJECTIONS_TOTAL: &str = "classbook_rejections_total";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) -> Result<(), metrics_exporter_prometheus::BuildError> {
    let Some(port) = port else { return Ok(()) };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
    Ok(())
}
