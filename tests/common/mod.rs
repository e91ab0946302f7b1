//! Shared utilities for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mq_router::event::{FunctionResult, InvocationContext, QueueMessage, TriggerEvent};
use mq_router::routing::{handler_fn, Handler, HandlerError};

/// Counts handler invocations.
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// An async handler that counts calls, yields once, and echoes `label`.
pub fn recording_handler(label: &'static str, calls: &CallCounter) -> Handler {
    let calls = calls.clone();
    handler_fn(move |_, _, _| {
        calls.hit();
        async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok::<_, HandlerError>(FunctionResult::ok(label))
        }
    })
}

/// Dispatch-ready inputs for a single message.
pub struct Invocation {
    pub event: TriggerEvent,
    pub message: QueueMessage,
    pub context: InvocationContext,
}

pub fn invocation(queue_id: &str, body: &str) -> Invocation {
    let message = QueueMessage::new(queue_id, body);
    Invocation {
        event: TriggerEvent::new(vec![message.clone()]),
        message,
        context: InvocationContext::generate(),
    }
}
