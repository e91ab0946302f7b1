//! Handler response returned to the runtime.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Result of a cloud-function invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResult {
    pub status_code: u16,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub multi_value_headers: HashMap<String, Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl FunctionResult {
    /// A 200 response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            multi_value_headers: HashMap::new(),
            body: Some(body.into()),
            is_base64_encoded: false,
        }
    }

    /// A response with no body.
    pub fn empty(status_code: u16) -> Self {
        Self {
            body: None,
            ..Self::with_status(status_code, "")
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_camel_case() {
        let result = FunctionResult::ok("done").with_header("Content-Type", "text/plain");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["body"], "done");
        assert_eq!(json["headers"]["Content-Type"], "text/plain");
        assert_eq!(json["isBase64Encoded"], false);
        assert!(json.get("multiValueHeaders").is_none());
    }

    #[test]
    fn test_empty_result_has_no_body() {
        let json = serde_json::to_value(FunctionResult::empty(204)).unwrap();
        assert_eq!(json["statusCode"], 204);
        assert!(json.get("body").is_none());
    }
}
