use std::net::SocketAddr;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: intents accepted into a queue.
pub const SUBMITS_TOTAL: &str = "frontdesk_submits_total";

/// Counter: intents rejected at submission (no qualifying room).
pub const SUBMITS_REJECTED_TOTAL: &str = "frontdesk_submits_rejected_total";

/// Counter: bookings committed.
pub const COMMITS_TOTAL: &str = "frontdesk_commits_total";

/// Counter: accepted requests dropped at processing time.
pub const PROCESSING_MISSES_TOTAL: &str = "frontdesk_processing_misses_total";

/// Counter: commits reverted via undo.
pub const UNDOS_TOTAL: &str = "frontdesk_undos_total";

/// Counter: successful check-ins.
pub const CHECKINS_TOTAL: &str = "frontdesk_checkins_total";

// ── USE metrics (resource utilization) ──────────────────────────

/// Gauge: pending requests across both queues.
pub const QUEUE_DEPTH: &str = "frontdesk_queue_depth";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
