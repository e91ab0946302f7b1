//! Validator pass.
//!
//! # Responsibilities
//! - Run a route's validators in order, stopping at the first `false`
//! - Convert a validator error into a failed pass
//!
//! # Design Decisions
//! - Runs for at most one route per dispatch (the first candidate)
//! - Errors never escape: they are logged at WARN with line breaks stripped

use crate::event::{InvocationContext, QueueMessage, TriggerEvent};
use crate::routing::route::Validator;

/// Returns true if every validator accepts the message.
pub fn run_validators(
    validators: &[Validator],
    event: &TriggerEvent,
    context: &InvocationContext,
    message: &QueueMessage,
) -> bool {
    for validator in validators {
        match validator(event, context, message) {
            Ok(true) => continue,
            Ok(false) => return false,
            Err(e) => {
                tracing::warn!(
                    request_id = %context.request_id,
                    "Validator failed with error: {}",
                    strip_line_breaks(&e.to_string())
                );
                return false;
            }
        }
    }
    true
}

fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}
