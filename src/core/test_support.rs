//! In-memory collaborators for unit tests

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Mutex;

use crate::calendar::CalendarClient;
use crate::core::Message;
use crate::database::ReminderStore;
use crate::features::reminders::{ReminderRecord, SheetRow};
use crate::line::{PushDispatcher, ReplySender};

#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<SheetRow>>,
}

impl MemoryStore {
    pub fn with_rows(rows: Vec<SheetRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub fn rows(&self) -> Vec<SheetRow> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReminderStore for MemoryStore {
    async fn append(&self, record: &ReminderRecord) -> Result<()> {
        self.rows.lock().unwrap().push(record.to_row());
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<SheetRow>> {
        Ok(self.rows())
    }
}

pub struct FailingStore;

#[async_trait]
impl ReminderStore for FailingStore {
    async fn append(&self, _record: &ReminderRecord) -> Result<()> {
        Err(anyhow!("store unavailable"))
    }

    async fn read_all(&self) -> Result<Vec<SheetRow>> {
        Err(anyhow!("store unavailable"))
    }
}

#[derive(Default)]
pub struct RecordingDispatcher {
    pushes: Mutex<Vec<(String, Vec<Message>)>>,
    fail_for: Option<String>,
}

impl RecordingDispatcher {
    pub fn failing_for(user_id: &str) -> Self {
        Self {
            fail_for: Some(user_id.to_string()),
            ..Default::default()
        }
    }

    pub fn pushes(&self) -> Vec<(String, Vec<Message>)> {
        self.pushes.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushDispatcher for RecordingDispatcher {
    async fn push(&self, user_id: &str, messages: &[Message]) -> Result<()> {
        if self.fail_for.as_deref() == Some(user_id) {
            return Err(anyhow!("push rejected for {user_id}"));
        }
        self.pushes
            .lock()
            .unwrap()
            .push((user_id.to_string(), messages.to_vec()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingReplier {
    replies: Mutex<Vec<(String, Vec<Message>)>>,
}

impl RecordingReplier {
    pub fn replies(&self) -> Vec<(String, Vec<Message>)> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySender for RecordingReplier {
    async fn reply(&self, reply_token: &str, messages: &[Message]) -> Result<()> {
        self.replies
            .lock()
            .unwrap()
            .push((reply_token.to_string(), messages.to_vec()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingCalendar {
    events: Mutex<Vec<(String, NaiveDateTime, NaiveDateTime)>>,
    fail: bool,
}

impl RecordingCalendar {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn events(&self) -> Vec<(String, NaiveDateTime, NaiveDateTime)> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalendarClient for RecordingCalendar {
    async fn create_event(
        &self,
        title: &str,
        begin: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<()> {
        if self.fail {
            return Err(anyhow!("calendar unavailable"));
        }
        self.events
            .lock()
            .unwrap()
            .push((title.to_string(), begin, end));
        Ok(())
    }
}
