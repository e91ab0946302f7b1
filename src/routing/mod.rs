//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming QueueMessage (queue_id, body) + TriggerEvent + InvocationContext
//!     → router.rs (scan route table in order)
//!     → matcher.rs (queue id → JSON pattern → regex, short-circuit)
//!     → validator.rs (first candidate only)
//!     → route.rs (invoke handler, await result)
//!     → Return: FunctionResult or RouterError
//!
//! Route Compilation (at startup):
//!     RouteConfig[] + HandlerRegistry
//!     → Resolve handler / validator names
//!     → Compile filters (regex, JSON patterns)
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled once, immutable at dispatch time
//! - Deterministic: same input always matches same route
//! - First match wins (caller-controlled order)
//! - No retries, no shared state between dispatches

pub mod error;
pub mod matcher;
pub mod pattern;
pub mod registry;
pub mod route;
pub mod router;
pub mod validator;

pub use error::{BuildError, RouterError, RouterResult};
pub use matcher::{Matcher, RouteFilter};
pub use pattern::{match_object_pattern, PatternMatcher, StructuralMatcher};
pub use registry::HandlerRegistry;
pub use route::{
    handler_fn, sync_handler_fn, validator_fn, Handler, HandlerError, HandlerFuture,
    HandlerResult, Route, RouteBuilder, Validator, ValidatorError,
};
pub use router::{dispatch, Router};
