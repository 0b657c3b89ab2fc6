//! LINE message payload shared by replies and pushes

use serde::{Deserialize, Serialize};

use super::response::truncate_for_message;

/// A single message object, serialized as `{"type": "text", "text": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    Text { text: String },
}

impl Message {
    pub fn text(text: impl Into<String>) -> Self {
        Message::Text { text: text.into() }
    }

    /// Copy of this message with its text cut down to the platform limit
    pub fn fit_to_limit(&self) -> Self {
        match self {
            Message::Text { text } => Message::Text {
                text: truncate_for_message(text),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_message_wire_shape() {
        let json = serde_json::to_value(Message::text("忘れずに")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "text", "text": "忘れずに"}));
    }
}
