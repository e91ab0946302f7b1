//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing produces:
//!     → logging.rs (structured log events, request_id as correlation id)
//!     → metrics.rs (dispatch counters, handler latency)
//!
//! Consumers:
//!     → Log aggregation (stdout, pretty or JSON)
//!     → Whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID is attached to every routing log event
//! - Metrics go through the `metrics` facade; no recorder = no cost

pub mod logging;
pub mod metrics;
