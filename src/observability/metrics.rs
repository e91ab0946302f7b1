//! Dispatch metrics.
//!
//! # Metrics
//! - `mq_router_dispatch_total` (counter): dispatches by outcome, route
//! - `mq_router_handler_duration_seconds` (histogram): handler latency by route
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the host chooses the exporter
//! - Unmatched messages use the route label `none`

use std::time::Instant;

/// How a dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Handled,
    HandlerFailed,
    InvalidRequest,
    NoMatch,
}

impl DispatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchOutcome::Handled => "handled",
            DispatchOutcome::HandlerFailed => "handler_failed",
            DispatchOutcome::InvalidRequest => "invalid_request",
            DispatchOutcome::NoMatch => "no_match",
        }
    }
}

pub fn record_dispatch(outcome: DispatchOutcome, route: &str) {
    metrics::counter!(
        "mq_router_dispatch_total",
        "outcome" => outcome.as_str(),
        "route" => route.to_string()
    )
    .increment(1);
}

pub fn record_handler_duration(route: &str, start: Instant) {
    metrics::histogram!(
        "mq_router_handler_duration_seconds",
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
