//! Message-queue trigger event envelope.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event type reported by the runtime for message-queue triggers.
pub const MESSAGE_QUEUE_EVENT_TYPE: &str = "yandex.cloud.events.messagequeue.QueueMessage";

/// Trigger event carrying a batch of queue messages.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TriggerEvent {
    /// Messages delivered in this invocation, in queue order.
    #[serde(default)]
    pub messages: Vec<QueueMessage>,
}

impl TriggerEvent {
    /// Create an event wrapping the given messages.
    pub fn new(messages: Vec<QueueMessage>) -> Self {
        Self { messages }
    }

    /// Parse an event from the runtime's JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

/// Metadata attached to every trigger message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EventMetadata {
    pub event_id: String,
    pub event_type: String,
    pub created_at: String,
    pub cloud_id: Option<String>,
    pub folder_id: Option<String>,
}

/// One message delivered by a queue trigger.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct QueueMessage {
    #[serde(default)]
    pub event_metadata: EventMetadata,

    pub details: MessageDetails,
}

impl QueueMessage {
    /// Build a message with the given queue id and raw body.
    pub fn new(queue_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            event_metadata: EventMetadata {
                event_type: MESSAGE_QUEUE_EVENT_TYPE.to_string(),
                ..EventMetadata::default()
            },
            details: MessageDetails {
                queue_id: queue_id.into(),
                message: MessagePayload {
                    body: body.into(),
                    ..MessagePayload::default()
                },
            },
        }
    }

    /// Identifier of the queue the message was read from.
    pub fn queue_id(&self) -> &str {
        &self.details.queue_id
    }

    /// Raw message body. Not necessarily valid JSON.
    pub fn body(&self) -> &str {
        &self.details.message.body
    }

    /// Queue-assigned message id, if the runtime supplied one.
    pub fn message_id(&self) -> Option<&str> {
        let id = self.details.message.message_id.as_str();
        (!id.is_empty()).then_some(id)
    }
}

/// Queue-level details of a trigger message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MessageDetails {
    #[serde(default)]
    pub queue_id: String,

    #[serde(default)]
    pub message: MessagePayload,
}

/// The queue message itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MessagePayload {
    pub message_id: String,
    pub md5_of_body: String,
    pub body: String,

    /// System attributes such as `SentTimestamp`.
    pub attributes: HashMap<String, String>,

    /// User attributes; values keep the runtime's `{dataType, stringValue}` shape.
    pub message_attributes: HashMap<String, Value>,

    pub md5_of_message_attributes: String,
}
