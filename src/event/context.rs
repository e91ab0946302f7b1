//! Invocation context supplied by the hosting runtime.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-invocation context.
///
/// Opaque to the Router except for `request_id`, which correlates log entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationContext {
    pub request_id: String,

    #[serde(default)]
    pub function_name: Option<String>,

    #[serde(default)]
    pub function_version: Option<String>,

    #[serde(default, rename = "memoryLimitInMB")]
    pub memory_limit_mb: Option<u32>,
}

impl InvocationContext {
    /// Create a context with the runtime-provided request id.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            function_name: None,
            function_version: None,
            memory_limit_mb: None,
        }
    }

    /// Create a context with a fresh UUID v4 request id.
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    pub fn with_function(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.function_name = Some(name.into());
        self.function_version = Some(version.into());
        self
    }
}
