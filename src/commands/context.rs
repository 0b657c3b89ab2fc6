//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::sync::Arc;

use crate::calendar::CalendarClient;
use crate::database::ReminderStore;

/// Services available to every command handler
#[derive(Clone)]
pub struct CommandContext {
    pub store: Arc<dyn ReminderStore>,
    pub calendar: Arc<dyn CalendarClient>,
}

impl CommandContext {
    pub fn new(store: Arc<dyn ReminderStore>, calendar: Arc<dyn CalendarClient>) -> Self {
        Self { store, calendar }
    }
}
