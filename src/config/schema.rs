//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route table, evaluated in declaration order.
    pub routes: Vec<RouteConfig>,
}

/// Declarative route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier for logging/metrics.
    pub name: String,

    /// Accepted queue ids. Absent = any queue.
    #[serde(default)]
    pub queue_ids: Option<Vec<String>>,

    /// Body conditions.
    #[serde(default)]
    pub body: Option<BodyConfig>,

    /// Registered validator names, run in order.
    #[serde(default)]
    pub validators: Vec<String>,

    /// Registered handler name.
    pub handler: String,
}

impl RouteConfig {
    /// A route with no conditions dispatching to `handler`.
    pub fn new(name: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            queue_ids: None,
            body: None,
            validators: Vec::new(),
            handler: handler.into(),
        }
    }

    pub fn json_pattern(&self) -> Option<&Value> {
        self.body.as_ref().and_then(|b| b.json.as_ref())
    }

    pub fn regex_pattern(&self) -> Option<&str> {
        self.body.as_ref().and_then(|b| b.pattern.as_deref())
    }
}

/// Body conditions of a route.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Structural pattern the body must match after JSON parsing.
    pub json: Option<Value>,

    /// Regex the raw body must match.
    pub pattern: Option<String>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
