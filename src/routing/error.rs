//! Routing error definitions.

use thiserror::Error;

use crate::routing::route::HandlerError;

/// Errors surfaced by a dispatch.
#[derive(Debug, Error)]
pub enum RouterError {
    /// A route matched structurally but its validator pass failed.
    #[error("Invalid request.")]
    InvalidRequest,

    /// No route matched the message.
    #[error("There is no matched route.")]
    NoMatchedRoute,

    /// The selected handler failed.
    #[error("Handler failed: {0}")]
    Handler(#[source] HandlerError),
}

impl RouterError {
    /// HTTP-style status code for the failure.
    pub fn status_code(&self) -> u16 {
        match self {
            RouterError::InvalidRequest => 400,
            RouterError::NoMatchedRoute => 404,
            RouterError::Handler(_) => 500,
        }
    }

    /// Routing failures are permanent for a given message and route table.
    pub fn is_permanent(&self) -> bool {
        matches!(self, RouterError::InvalidRequest | RouterError::NoMatchedRoute)
    }
}

/// Errors raised while building routes from configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Route '{route}' references unknown handler '{handler}'")]
    UnknownHandler { route: String, handler: String },

    #[error("Route '{route}' references unknown validator '{validator}'")]
    UnknownValidator { route: String, validator: String },

    #[error("Route '{route}' has an invalid body pattern: {source}")]
    InvalidPattern {
        route: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for dispatch operations.
pub type RouterResult<T> = Result<T, RouterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(RouterError::InvalidRequest.to_string(), "Invalid request.");
        assert_eq!(RouterError::NoMatchedRoute.to_string(), "There is no matched route.");

        let err = RouterError::Handler("boom".into());
        assert_eq!(err.to_string(), "Handler failed: boom");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(RouterError::InvalidRequest.status_code(), 400);
        assert_eq!(RouterError::NoMatchedRoute.status_code(), 404);
        assert_eq!(RouterError::Handler("x".into()).status_code(), 500);
    }

    #[test]
    fn test_permanence() {
        assert!(RouterError::InvalidRequest.is_permanent());
        assert!(RouterError::NoMatchedRoute.is_permanent());
        assert!(!RouterError::Handler("x".into()).is_permanent());
    }
}
