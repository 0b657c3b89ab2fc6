//! Inbound LINE webhook payload

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookBody {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub source: Option<EventSource>,
    #[serde(default)]
    pub message: Option<EventMessage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// A text message from a user that can be answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEvent {
    pub user_id: String,
    pub reply_token: String,
    pub text: String,
}

impl WebhookEvent {
    /// The text message carried by this event, if it is one we handle
    pub fn as_text(&self) -> Option<TextEvent> {
        if self.event_type != "message" {
            return None;
        }
        let message = self.message.as_ref()?;
        if message.message_type != "text" {
            return None;
        }

        Some(TextEvent {
            user_id: self.source.as_ref()?.user_id.clone()?,
            reply_token: self.reply_token.clone()?,
            text: message.text.clone()?,
        })
    }
}
