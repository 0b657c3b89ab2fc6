//! Reminder registration handler
//!
//! Handles: 登録 <M/D h:m> <message>
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Absolute date grammar, calendar mirror
//! - 1.0.0: Initial implementation

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::{debug, info, warn};
use std::sync::Arc;

use crate::calendar::event_end;
use crate::commands::context::CommandContext;
use crate::commands::handler::{Reply, TextCommandHandler};
use crate::features::reminders::{evaluate, Registration, REGISTER_TOKEN};
use crate::line::TextEvent;

/// Handler for reminder registration
pub struct RemindHandler;

#[async_trait]
impl TextCommandHandler for RemindHandler {
    fn prefixes(&self) -> &'static [&'static str] {
        &[REGISTER_TOKEN]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        event: &TextEvent,
        now: NaiveDateTime,
    ) -> Result<Reply> {
        let record = match evaluate(&event.text, &event.user_id, now) {
            Registration::Accepted(record) => record,
            Registration::NotRegistration | Registration::Malformed => {
                debug!("Malformed registration from {}: {:?}", event.user_id, event.text);
                return Ok(Reply::SendError);
            }
            Registration::PastDate => {
                debug!("Past date registration from {}: {:?}", event.user_id, event.text);
                return Ok(Reply::SendInvalidDateError);
            }
        };

        ctx.store
            .append(&record)
            .await
            .context("Failed to store reminder")?;

        info!(
            "Registered reminder for user {} at {}",
            record.user_id, record.scheduled_at
        );

        let begin = record.scheduled_at;
        if let Err(e) = ctx
            .calendar
            .create_event(&record.message, begin, event_end(begin))
            .await
        {
            warn!("Calendar entry for reminder at {begin} failed: {e:#}");
        }

        Ok(Reply::Registered)
    }
}
