//! Route definitions and builder.
//!
//! A route pairs declarative filters with an ordered list of validators and
//! a handler. Routes are immutable once built.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::{self, BoxFuture};
use regex::Regex;
use serde_json::Value;

use crate::event::{FunctionResult, InvocationContext, QueueMessage, TriggerEvent};
use crate::routing::matcher::{
    AndMatcher, BodyJsonMatcher, BodyRegexMatcher, Matcher, RouteFilter,
};
use crate::routing::pattern::PatternMatcher;

/// Error raised by a handler; surfaced to the caller unchanged.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Error raised by a validator; converted into a failed validator pass.
pub type ValidatorError = Box<dyn std::error::Error + Send + Sync>;

pub type HandlerResult = Result<FunctionResult, HandlerError>;

/// Deferred handler result. Synchronous handlers resolve immediately.
pub type HandlerFuture = BoxFuture<'static, HandlerResult>;

/// Route handler. Invoked at most once per dispatch.
pub type Handler =
    Arc<dyn Fn(&TriggerEvent, &InvocationContext, &QueueMessage) -> HandlerFuture + Send + Sync>;

/// Side predicate evaluated after the declarative filters pass.
pub type Validator = Arc<
    dyn Fn(&TriggerEvent, &InvocationContext, &QueueMessage) -> Result<bool, ValidatorError>
        + Send
        + Sync,
>;

/// Wrap an async handler. The returned future is boxed unchanged.
pub fn handler_fn<F, Fut>(f: F) -> Handler
where
    F: Fn(&TriggerEvent, &InvocationContext, &QueueMessage) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    Arc::new(
        move |event: &TriggerEvent, context: &InvocationContext, message: &QueueMessage| -> HandlerFuture {
            Box::pin(f(event, context, message))
        },
    )
}

/// Wrap a synchronous handler; its value becomes an already-resolved future.
pub fn sync_handler_fn<F>(f: F) -> Handler
where
    F: Fn(&TriggerEvent, &InvocationContext, &QueueMessage) -> HandlerResult + Send + Sync + 'static,
{
    Arc::new(
        move |event: &TriggerEvent, context: &InvocationContext, message: &QueueMessage| -> HandlerFuture {
            Box::pin(future::ready(f(event, context, message)))
        },
    )
}

pub fn validator_fn<F>(f: F) -> Validator
where
    F: Fn(&TriggerEvent, &InvocationContext, &QueueMessage) -> Result<bool, ValidatorError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// A compiled route.
pub struct Route {
    name: Option<String>,
    filter: AndMatcher,
    validators: Vec<Validator>,
    handler: Handler,
}

impl Route {
    pub fn builder() -> RouteBuilder {
        RouteBuilder::default()
    }

    /// Route name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name used in logs and metric labels.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }

    /// True if every declared filter accepts the message. Validators are not run.
    pub fn is_candidate(&self, message: &QueueMessage) -> bool {
        self.filter.matches(message)
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Invoke the handler without awaiting it.
    pub fn invoke(
        &self,
        event: &TriggerEvent,
        context: &InvocationContext,
        message: &QueueMessage,
    ) -> HandlerFuture {
        (self.handler)(event, context, message)
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("filter", &self.filter)
            .field("validators", &self.validators.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Route`]. Terminated by one of the handler methods.
#[derive(Default)]
pub struct RouteBuilder {
    name: Option<String>,
    queue_ids: Option<HashSet<String>>,
    filter: RouteFilter,
    validators: Vec<Validator>,
}

impl RouteBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Accept messages from this queue. May be called repeatedly.
    pub fn queue_id(mut self, queue_id: impl Into<String>) -> Self {
        self.queue_ids
            .get_or_insert_with(HashSet::new)
            .insert(queue_id.into());
        self
    }

    /// Accept messages from any of these queues. An empty list matches nothing.
    pub fn queue_ids<I, S>(mut self, queue_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.queue_ids
            .get_or_insert_with(HashSet::new)
            .extend(queue_ids.into_iter().map(Into::into));
        self
    }

    /// Require the body to parse as JSON and match `pattern` structurally.
    pub fn body_json(mut self, pattern: Value) -> Self {
        self.filter.set_body_json(BodyJsonMatcher::new(pattern));
        self
    }

    pub fn body_json_with(mut self, pattern: Value, matcher: Arc<dyn PatternMatcher>) -> Self {
        self.filter
            .set_body_json(BodyJsonMatcher::with_matcher(pattern, matcher));
        self
    }

    /// Require a non-empty body matching `pattern`.
    pub fn body_pattern(mut self, pattern: Regex) -> Self {
        self.filter.set_body_regex(BodyRegexMatcher::new(pattern));
        self
    }

    /// Replace the declarative filter. Queue ids given through `queue_id` or
    /// `queue_ids`, before or after this call, are merged into its queue set.
    pub fn filter(mut self, filter: RouteFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn validator<F>(mut self, f: F) -> Self
    where
        F: Fn(&TriggerEvent, &InvocationContext, &QueueMessage) -> Result<bool, ValidatorError>
            + Send
            + Sync
            + 'static,
    {
        self.validators.push(validator_fn(f));
        self
    }

    pub fn validators<I>(mut self, validators: I) -> Self
    where
        I: IntoIterator<Item = Validator>,
    {
        self.validators.extend(validators);
        self
    }

    /// Finish with an async handler.
    pub fn handler<F, Fut>(self, f: F) -> Route
    where
        F: Fn(&TriggerEvent, &InvocationContext, &QueueMessage) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.with_handler(handler_fn(f))
    }

    /// Finish with a synchronous handler.
    pub fn sync_handler<F>(self, f: F) -> Route
    where
        F: Fn(&TriggerEvent, &InvocationContext, &QueueMessage) -> HandlerResult
            + Send
            + Sync
            + 'static,
    {
        self.with_handler(sync_handler_fn(f))
    }

    pub fn with_handler(self, handler: Handler) -> Route {
        let mut filter = self.filter;
        if let Some(queue_ids) = self.queue_ids {
            filter.add_queue_ids(queue_ids);
        }
        Route {
            name: self.name,
            filter: filter.compile(),
            validators: self.validators,
            handler,
        }
    }
}
