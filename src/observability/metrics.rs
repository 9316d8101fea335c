//! Metrics collection and exposition.
//!
//! # Metrics
//! - `facilitator_stakes_initiated_total` (counter): stakes submitted and
//!   recorded in the pending table
//! - `facilitator_stakes_progressed_total` (counter): progression rounds
//!   accepted by both gateways
//! - `facilitator_stake_failures_total` (counter): failed operations,
//!   labeled by stage

use std::net::SocketAddr;

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter and register metric descriptions.
///
/// Failures are logged, not fatal: the facilitator keeps working without
/// an exporter.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
            return;
        }
    }

    describe_counter!(
        "facilitator_stakes_initiated_total",
        "Stakes submitted and recorded in the pending table"
    );
    describe_counter!(
        "facilitator_stakes_progressed_total",
        "Progression rounds accepted by both gateways"
    );
    describe_counter!(
        "facilitator_stake_failures_total",
        "Failed facilitator operations by stage"
    );
}

/// Count a stake that was submitted, read back, and stored.
pub fn record_stake_initiated() {
    counter!("facilitator_stakes_initiated_total").increment(1);
}

/// Count a completed progression round.
pub fn record_stake_progressed() {
    counter!("facilitator_stakes_progressed_total").increment(1);
}

/// Count a failed operation. `stage` is one of `submit`, `outbox`,
/// `nonce`, `progress`.
pub fn record_stake_failure(stage: &'static str) {
    counter!("facilitator_stake_failures_total", "stage" => stage).increment(1);
}
