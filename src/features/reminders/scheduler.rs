//! Delivery loop: every tick, push the reminders that fell due in the last minute
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{Context, Result};
use chrono::{FixedOffset, NaiveDateTime};
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;

use super::grouping::group_by_user;
use super::record::{ReminderRecord, DATE_FORMAT};
use super::window::MatchWindow;
use crate::core::clock::local_now;
use crate::database::ReminderStore;
use crate::line::PushDispatcher;

/// Outcome counters of one delivery run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub rows_scanned: usize,
    pub rows_skipped: usize,
    pub reminders_matched: usize,
    pub users_notified: usize,
    pub pushes_failed: usize,
}

pub struct ReminderScheduler {
    store: Arc<dyn ReminderStore>,
    dispatcher: Arc<dyn PushDispatcher>,
    offset: FixedOffset,
}

impl ReminderScheduler {
    pub fn new(
        store: Arc<dyn ReminderStore>,
        dispatcher: Arc<dyn PushDispatcher>,
        offset: FixedOffset,
    ) -> Self {
        Self {
            store,
            dispatcher,
            offset,
        }
    }

    /// Run forever, one delivery pass per `interval`
    pub async fn run(self, interval: Duration) {
        info!("⏰ Reminder scheduler started (every {}s)", interval.as_secs());
        let mut ticker = delivery_ticker(interval);

        loop {
            ticker.tick().await;
            let now = local_now(&self.offset);
            match self.run_once(now).await {
                Ok(report) => debug!("Delivery run finished: {report:?}"),
                Err(e) => error!("❌ Delivery run failed: {e:#}"),
            }
        }
    }

    /// Deliver everything scheduled in the window ending at `now`
    pub async fn run_once(&self, now: NaiveDateTime) -> Result<DeliveryReport> {
        let window = MatchWindow::ending_at(now);
        info!(
            "{} 〜 {} のリマインドを送信します",
            window.begin.format(DATE_FORMAT),
            window.end.format(DATE_FORMAT)
        );

        let rows = self
            .store
            .read_all()
            .await
            .context("Failed to read reminder rows")?;

        let mut report = DeliveryReport {
            rows_scanned: rows.len(),
            ..Default::default()
        };

        let records: Vec<ReminderRecord> = rows
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match ReminderRecord::try_from(row) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping reminder row {index}: {e}");
                    report.rows_skipped += 1;
                    None
                }
            })
            .collect();

        let matched = window.select(&records);
        report.reminders_matched = matched.len();

        for (user_id, messages) in group_by_user(matched) {
            match self.dispatcher.push(&user_id, &messages).await {
                Ok(()) => {
                    info!("📨 Sent {} reminder(s) to {user_id}", messages.len());
                    report.users_notified += 1;
                }
                Err(e) => {
                    error!("Failed to push reminders to {user_id}: {e:#}");
                    report.pushes_failed += 1;
                }
            }
        }

        Ok(report)
    }
}

/// Tick source for [`ReminderScheduler::run`]. Ticks missed during a slow run are dropped.
fn delivery_ticker(interval: Duration) -> tokio::time::Interval {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    ticker
}
