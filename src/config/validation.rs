//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route names are present and unique
//! - Check body regexes compile
//! - Validate value ranges (log level, queue id lists)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Handler names are checked later, against the registry

use std::collections::HashSet;

use regex::Regex;
use thiserror::Error;

use crate::config::schema::RouterConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty name")]
    EmptyRouteName { index: usize },

    #[error("route '{0}' is declared more than once")]
    DuplicateRoute(String),

    #[error("route '{0}' has no handler")]
    MissingHandler(String),

    #[error("route '{0}' declares an empty queue_ids list and can never match")]
    EmptyQueueIds(String),

    #[error("route '{route}' has an invalid body pattern: {reason}")]
    InvalidPattern { route: String, reason: String },

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.observability.log_level.to_lowercase().as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    let mut seen = HashSet::new();
    for (index, route) in config.routes.iter().enumerate() {
        if route.name.trim().is_empty() {
            errors.push(ValidationError::EmptyRouteName { index });
        } else if !seen.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateRoute(route.name.clone()));
        }

        if route.handler.trim().is_empty() {
            errors.push(ValidationError::MissingHandler(route.name.clone()));
        }

        if route.queue_ids.as_ref().is_some_and(|ids| ids.is_empty()) {
            errors.push(ValidationError::EmptyQueueIds(route.name.clone()));
        }

        if let Some(pattern) = route.regex_pattern() {
            if let Err(e) = Regex::new(pattern) {
                errors.push(ValidationError::InvalidPattern {
                    route: route.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
