//! Text command handler trait and reply outcomes
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

use super::context::CommandContext;
use crate::core::response::{FORMAT_GUIDANCE_REPLY, PAST_DATE_REPLY, REGISTERED_REPLY};
use crate::core::Message;
use crate::line::TextEvent;

/// What the user is told after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Registered,
    /// Format guidance, for malformed commands and unrecognised text
    SendError,
    /// The requested time is already past
    SendInvalidDateError,
}

impl Reply {
    pub fn text(&self) -> &'static str {
        match self {
            Reply::Registered => REGISTERED_REPLY,
            Reply::SendError => FORMAT_GUIDANCE_REPLY,
            Reply::SendInvalidDateError => PAST_DATE_REPLY,
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        vec![Message::text(self.text())]
    }
}

/// Trait for chat text command handlers
///
/// A handler claims one or more prefix tokens. Text is routed to the handler whose prefix
/// it starts with; the handler decides the reply.
///
/// # Example
///
/// ```ignore
/// pub struct EchoHandler;
///
/// #[async_trait]
/// impl TextCommandHandler for EchoHandler {
///     fn prefixes(&self) -> &'static [&'static str] {
///         &["echo"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: Arc<CommandContext>,
///         event: &TextEvent,
///         now: NaiveDateTime,
///     ) -> Result<Reply> {
///         Ok(Reply::SendError)
///     }
/// }
/// ```
#[async_trait]
pub trait TextCommandHandler: Send + Sync {
    /// Prefix token(s) this handler processes
    fn prefixes(&self) -> &'static [&'static str];

    /// Handle the command sent at `now` (bot-local wall clock)
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        event: &TextEvent,
        now: NaiveDateTime,
    ) -> Result<Reply>;
}
