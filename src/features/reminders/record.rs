//! Reminder records and their stored row form

use chrono::NaiveDateTime;
use thiserror::Error;

/// Column order of the reminder sheet
pub const COLUMN_HEADER: [&str; 4] = ["date", "message", "user_id", "created_at"];

/// Format used to write the `date` cell
pub const DATE_FORMAT: &str = "%Y/%m/%d %H:%M";
/// Format used to write the `created_at` cell
pub const CREATED_AT_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Formats accepted when reading a `date` or `created_at` cell back
const READ_FORMATS: [&str; 4] = [
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// A validated reminder. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRecord {
    pub scheduled_at: NaiveDateTime,
    pub message: String,
    pub user_id: String,
    /// Audit only. Absent when a stored row carries no readable registration time.
    pub created_at: Option<NaiveDateTime>,
}

impl ReminderRecord {
    pub fn new(
        user_id: impl Into<String>,
        message: impl Into<String>,
        scheduled_at: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            scheduled_at,
            message: message.into(),
            user_id: user_id.into(),
            created_at: Some(now),
        }
    }

    pub fn to_row(&self) -> SheetRow {
        SheetRow {
            date: self.scheduled_at.format(DATE_FORMAT).to_string(),
            message: self.message.clone(),
            user_id: self.user_id.clone(),
            created_at: self
                .created_at
                .map(|t| t.format(CREATED_AT_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }
}

/// Loosely typed row as held by the store; every cell is plain text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    pub date: String,
    pub message: String,
    pub user_id: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    #[error("unparsable date cell: {0:?}")]
    InvalidDate(String),
    #[error("row has no user id")]
    MissingUserId,
    #[error("row has an empty message")]
    EmptyMessage,
}

impl TryFrom<SheetRow> for ReminderRecord {
    type Error = RowParseError;

    fn try_from(row: SheetRow) -> Result<Self, Self::Error> {
        let scheduled_at =
            parse_timestamp(&row.date).ok_or_else(|| RowParseError::InvalidDate(row.date.clone()))?;

        let user_id = row.user_id.trim();
        if user_id.is_empty() {
            return Err(RowParseError::MissingUserId);
        }
        if row.message.is_empty() {
            return Err(RowParseError::EmptyMessage);
        }

        Ok(ReminderRecord {
            scheduled_at,
            created_at: parse_timestamp(&row.created_at),
            user_id: user_id.to_string(),
            message: row.message,
        })
    }
}

fn parse_timestamp(cell: &str) -> Option<NaiveDateTime> {
    let cell = cell.trim();
    READ_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(cell, fmt).ok())
}
