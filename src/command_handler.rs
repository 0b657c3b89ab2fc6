//! # Message Command Dispatch
//!
//! Routes inbound text messages to their command handler and sends exactly one reply per
//! message. Text that no handler claims gets the format guidance reply.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use chrono::NaiveDateTime;
use log::{debug, error};
use std::sync::Arc;

use crate::commands::handlers::create_all_handlers;
use crate::commands::{CommandContext, CommandRegistry, Reply};
use crate::core::response::INTERNAL_ERROR_REPLY;
use crate::core::Message;
use crate::line::{ReplySender, TextEvent};

#[derive(Clone)]
pub struct CommandHandler {
    registry: CommandRegistry,
    context: Arc<CommandContext>,
    replier: Arc<dyn ReplySender>,
}

impl CommandHandler {
    pub fn new(context: CommandContext, replier: Arc<dyn ReplySender>) -> Self {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }

        Self {
            registry,
            context: Arc::new(context),
            replier,
        }
    }

    /// Decide the reply for one text message without sending it
    pub async fn dispatch(&self, event: &TextEvent, now: NaiveDateTime) -> Result<Reply> {
        match self.registry.find(&event.text) {
            Some(handler) => handler.handle(Arc::clone(&self.context), event, now).await,
            None => {
                debug!("No command in message from {}", event.user_id);
                Ok(Reply::SendError)
            }
        }
    }

    /// Handle one text message and reply to it
    pub async fn handle_message(&self, event: &TextEvent, now: NaiveDateTime) -> Result<()> {
        let messages = match self.dispatch(event, now).await {
            Ok(reply) => reply.messages(),
            Err(e) => {
                error!("Error handling message from {}: {e:#}", event.user_id);
                vec![Message::text(INTERNAL_ERROR_REPLY)]
            }
        };

        self.replier.reply(&event.reply_token, &messages).await
    }
}
