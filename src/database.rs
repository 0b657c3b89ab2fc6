//! # Reminder Sheet Store
//!
//! Append-only row store holding reminders as loosely typed text cells, one table with the
//! sheet's column header order. Rows are read back in insertion order.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use sqlite::{Connection, State};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::features::reminders::{ReminderRecord, SheetRow, COLUMN_HEADER};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS remind (
    row_id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL DEFAULT '',
    message TEXT NOT NULL DEFAULT '',
    user_id TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT ''
)";

/// Durable store for reminder rows
#[async_trait]
pub trait ReminderStore: Send + Sync {
    /// Persist one record at the end of the sheet
    async fn append(&self, record: &ReminderRecord) -> Result<()>;

    /// Every stored row, oldest first
    async fn read_all(&self) -> Result<Vec<SheetRow>>;
}

#[derive(Clone)]
pub struct SqliteSheetStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteSheetStore {
    /// Open (or create) the store at `path`. `:memory:` gives a throwaway store.
    pub fn open(path: &str) -> Result<Self> {
        let connection =
            sqlite::open(path).with_context(|| format!("Failed to open database at {path}"))?;
        connection
            .execute(CREATE_TABLE)
            .context("Failed to create remind table")?;

        info!("🗄️ Reminder store ready at {path}");
        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }
}

#[async_trait]
impl ReminderStore for SqliteSheetStore {
    async fn append(&self, record: &ReminderRecord) -> Result<()> {
        let connection = self.connection.lock().await;
        insert_row(&connection, &record.to_row())
    }

    async fn read_all(&self) -> Result<Vec<SheetRow>> {
        let connection = self.connection.lock().await;
        select_rows(&connection)
    }
}

fn insert_row(connection: &Connection, row: &SheetRow) -> Result<()> {
    let mut statement = connection.prepare(format!(
        "INSERT INTO remind ({}) VALUES (?, ?, ?, ?)",
        COLUMN_HEADER.join(", ")
    ))?;
    statement.bind((1, row.date.as_str()))?;
    statement.bind((2, row.message.as_str()))?;
    statement.bind((3, row.user_id.as_str()))?;
    statement.bind((4, row.created_at.as_str()))?;
    statement.next()?;
    Ok(())
}

fn select_rows(connection: &Connection) -> Result<Vec<SheetRow>> {
    let mut statement = connection.prepare(format!(
        "SELECT {} FROM remind ORDER BY row_id",
        COLUMN_HEADER.join(", ")
    ))?;

    let mut rows = Vec::new();
    while let State::Row = statement.next()? {
        rows.push(SheetRow {
            date: statement.read::<String, _>(0)?,
            message: statement.read::<String, _>(1)?,
            user_id: statement.read::<String, _>(2)?,
            created_at: statement.read::<String, _>(3)?,
        });
    }
    Ok(rows)
}
