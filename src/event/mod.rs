//! Invocation payload subsystem.
//!
//! # Data Flow
//! ```text
//! Cloud-function runtime
//!     → message.rs (trigger event envelope → QueueMessage[])
//!     → context.rs (request id, function metadata)
//!     → [routing layer selects handler]
//!     → result.rs (handler response returned to runtime)
//! ```
//!
//! # Design Decisions
//! - Envelope types mirror the runtime's JSON shape; unknown fields are ignored
//! - The Router only reads `queue_id` and `body`; everything else is passed through
//! - Values are never mutated after construction

pub mod context;
pub mod message;
pub mod result;

pub use context::InvocationContext;
pub use message::{EventMetadata, MessageDetails, MessagePayload, QueueMessage, TriggerEvent};
pub use result::FunctionResult;
