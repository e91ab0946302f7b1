//! Message-queue trigger router.
//!
//! Routes each message of a cloud-function queue trigger to the first
//! handler whose declared criteria match, or fails with a typed error.
//!
//! ```text
//!   TriggerEvent ──▶ event ──▶ routing::Router ──▶ Route handler ──▶ FunctionResult
//!                                  │
//!                                  ├─ matcher (queue id → JSON → regex)
//!                                  └─ validator pass (first candidate only)
//! ```

pub mod config;
pub mod event;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use event::{FunctionResult, InvocationContext, QueueMessage, TriggerEvent};
pub use routing::{dispatch, Route, Router, RouterError};
