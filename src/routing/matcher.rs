//! Declarative route filters.
//!
//! # Responsibilities
//! - Match queue id (set membership)
//! - Match body parsed as JSON against a structural pattern
//! - Match raw body text against a regex
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Evaluation order is fixed: queue → JSON → regex, cheapest first
//! - Undeclared condition = always matches (wildcard)
//! - Malformed JSON body is a non-match, not an error
//! - Empty body never matches a declared regex

use std::collections::HashSet;
use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::config::RouteConfig;
use crate::event::QueueMessage;
use crate::routing::error::BuildError;
use crate::routing::pattern::{PatternMatcher, StructuralMatcher};

/// Trait for matching messages against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the message matches this condition.
    fn matches(&self, message: &QueueMessage) -> bool;
}

/// Matches the message's queue id against a set of accepted ids.
#[derive(Debug, Clone)]
pub struct QueueIdMatcher {
    queue_ids: HashSet<String>,
}

impl QueueIdMatcher {
    /// Create a new queue id matcher.
    /// An empty set matches nothing.
    pub fn new<I, S>(queue_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue_ids: queue_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Accept additional queue ids.
    pub fn extend<I, S>(&mut self, queue_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.queue_ids.extend(queue_ids.into_iter().map(Into::into));
    }
}

impl Matcher for QueueIdMatcher {
    fn matches(&self, message: &QueueMessage) -> bool {
        self.queue_ids.contains(message.queue_id())
    }
}

/// Matches the body, parsed as JSON, against a structural pattern.
#[derive(Debug, Clone)]
pub struct BodyJsonMatcher {
    pattern: Value,
    matcher: Arc<dyn PatternMatcher>,
}

impl BodyJsonMatcher {
    /// Create a matcher using the default structural semantics.
    pub fn new(pattern: Value) -> Self {
        Self::with_matcher(pattern, Arc::new(StructuralMatcher))
    }

    pub fn with_matcher(pattern: Value, matcher: Arc<dyn PatternMatcher>) -> Self {
        Self { pattern, matcher }
    }
}

impl Matcher for BodyJsonMatcher {
    fn matches(&self, message: &QueueMessage) -> bool {
        match serde_json::from_str::<Value>(message.body()) {
            Ok(body) => self.matcher.matches(&body, &self.pattern),
            Err(e) => {
                tracing::debug!(queue_id = %message.queue_id(), error = %e, "Body is not valid JSON");
                false
            }
        }
    }
}

/// Matches the raw body text against a regex.
#[derive(Debug, Clone)]
pub struct BodyRegexMatcher {
    pattern: Regex,
}

impl BodyRegexMatcher {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl Matcher for BodyRegexMatcher {
    fn matches(&self, message: &QueueMessage) -> bool {
        let body = message.body();
        !body.is_empty() && self.pattern.is_match(body)
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug, Default)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    pub fn push(&mut self, matcher: Box<dyn Matcher>) {
        self.matchers.push(matcher);
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, message: &QueueMessage) -> bool {
        // In declaration order, stop at the first miss
        self.matchers.iter().all(|m| m.matches(message))
    }
}

/// The declarative part of a route: queue, JSON and regex conditions.
#[derive(Debug, Default)]
pub struct RouteFilter {
    queue: Option<QueueIdMatcher>,
    json: Option<BodyJsonMatcher>,
    regex: Option<BodyRegexMatcher>,
}

impl RouteFilter {
    /// A filter with no conditions; matches every message.
    pub fn any() -> Self {
        Self::default()
    }

    /// Build the filter declared by a route config.
    pub fn from_config(config: &RouteConfig) -> Result<Self, BuildError> {
        let mut filter = Self::any();
        if let Some(queue_ids) = &config.queue_ids {
            filter.set_queue_ids(QueueIdMatcher::new(queue_ids.iter().cloned()));
        }
        if let Some(pattern) = config.json_pattern() {
            filter.set_body_json(BodyJsonMatcher::new(pattern.clone()));
        }
        if let Some(pattern) = config.regex_pattern() {
            let regex = Regex::new(pattern).map_err(|source| BuildError::InvalidPattern {
                route: config.name.clone(),
                source,
            })?;
            filter.set_body_regex(BodyRegexMatcher::new(regex));
        }
        Ok(filter)
    }

    pub fn set_queue_ids(&mut self, matcher: QueueIdMatcher) {
        self.queue = Some(matcher);
    }

    /// Add queue ids to the filter, merging with any already declared.
    pub fn add_queue_ids<I, S>(&mut self, queue_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match &mut self.queue {
            Some(matcher) => matcher.extend(queue_ids),
            None => self.queue = Some(QueueIdMatcher::new(queue_ids)),
        }
    }

    pub fn set_body_json(&mut self, matcher: BodyJsonMatcher) {
        self.json = Some(matcher);
    }

    pub fn set_body_regex(&mut self, matcher: BodyRegexMatcher) {
        self.regex = Some(matcher);
    }

    /// Compile the declared conditions into one AND matcher, queue → JSON → regex.
    pub fn compile(self) -> AndMatcher {
        let mut and = AndMatcher::default();
        if let Some(m) = self.queue {
            and.push(Box::new(m));
        }
        if let Some(m) = self.json {
            and.push(Box::new(m));
        }
        if let Some(m) = self.regex {
            and.push(Box::new(m));
        }
        and
    }
}
