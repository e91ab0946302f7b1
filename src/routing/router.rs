//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes in caller-defined order
//! - Find the first route whose declarative filters match
//! - Run that route's validators, then invoke its handler
//! - Return the handler's result or an explicit typed failure
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in table order; first match wins
//! - Validators run for at most one route: a rejected candidate ends the dispatch
//! - Explicit NoMatchedRoute rather than silent default

use std::time::Instant;

use crate::config::RouteConfig;
use crate::event::{FunctionResult, InvocationContext, QueueMessage, TriggerEvent};
use crate::observability::metrics::{self, DispatchOutcome};
use crate::routing::error::{BuildError, RouterError, RouterResult};
use crate::routing::registry::HandlerRegistry;
use crate::routing::route::Route;
use crate::routing::validator::run_validators;

/// Dispatch one message against an ordered route table.
///
/// Scans `routes` in order and takes the first candidate match. If its
/// validators pass, its handler is invoked and awaited; otherwise the
/// dispatch fails with [`RouterError::InvalidRequest`] without looking at
/// later routes. With no candidate at all it fails with
/// [`RouterError::NoMatchedRoute`].
pub async fn dispatch(
    routes: &[Route],
    event: &TriggerEvent,
    message: &QueueMessage,
    context: &InvocationContext,
) -> RouterResult<FunctionResult> {
    let Some(route) = routes.iter().find(|route| route.is_candidate(message)) else {
        tracing::warn!(
            request_id = %context.request_id,
            queue_id = %message.queue_id(),
            "There is no matched route"
        );
        metrics::record_dispatch(DispatchOutcome::NoMatch, "none");
        return Err(RouterError::NoMatchedRoute);
    };

    if !run_validators(route.validators(), event, context, message) {
        tracing::warn!(
            request_id = %context.request_id,
            route = %route.label(),
            "Invalid request"
        );
        metrics::record_dispatch(DispatchOutcome::InvalidRequest, route.label());
        return Err(RouterError::InvalidRequest);
    }

    let start = Instant::now();
    let result = route.invoke(event, context, message).await;
    metrics::record_handler_duration(route.label(), start);

    match result {
        Ok(response) => {
            metrics::record_dispatch(DispatchOutcome::Handled, route.label());
            Ok(response)
        }
        Err(e) => {
            metrics::record_dispatch(DispatchOutcome::HandlerFailed, route.label());
            Err(RouterError::Handler(e))
        }
    }
}

/// An immutable, ordered route table.
#[derive(Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Build a router from declarative route configs, resolving names in `registry`.
    pub fn from_config(
        configs: &[RouteConfig],
        registry: &HandlerRegistry,
    ) -> Result<Self, BuildError> {
        let routes = configs
            .iter()
            .map(|config| registry.build_route(config))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(routes = routes.len(), "Route table compiled");
        Ok(Self::new(routes))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// First route whose declarative filters accept the message. Validators are not run.
    pub fn find_route(&self, message: &QueueMessage) -> Option<&Route> {
        self.routes.iter().find(|route| route.is_candidate(message))
    }

    /// Dispatch one message. See [`dispatch`].
    pub async fn dispatch(
        &self,
        event: &TriggerEvent,
        message: &QueueMessage,
        context: &InvocationContext,
    ) -> RouterResult<FunctionResult> {
        dispatch(&self.routes, event, message, context).await
    }

    /// Dispatch every message of the event in order, one outcome per message.
    pub async fn dispatch_event(
        &self,
        event: &TriggerEvent,
        context: &InvocationContext,
    ) -> Vec<RouterResult<FunctionResult>> {
        let mut outcomes = Vec::with_capacity(event.messages.len());
        for message in &event.messages {
            outcomes.push(self.dispatch(event, message, context).await);
        }
        outcomes
    }
}
