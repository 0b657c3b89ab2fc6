//! Lookback window selection for the delivery run

use chrono::{Duration, NaiveDateTime};

use super::record::ReminderRecord;

/// Lookback width of one delivery run. Must cover the gap between consecutive runs.
pub const LOOKBACK_MINUTES: i64 = 1;

/// Inclusive `[begin, end]` scan interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWindow {
    pub begin: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl MatchWindow {
    pub fn new(begin: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { begin, end }
    }

    /// Window covering the minute that ends at `now`
    pub fn ending_at(now: NaiveDateTime) -> Self {
        Self::new(now - Duration::minutes(LOOKBACK_MINUTES), now)
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.begin <= at && at <= self.end
    }

    /// Records scheduled inside the window, in their original order
    pub fn select<'a, I>(&self, records: I) -> Vec<&'a ReminderRecord>
    where
        I: IntoIterator<Item = &'a ReminderRecord>,
    {
        records
            .into_iter()
            .filter(|record| self.contains(record.scheduled_at))
            .collect()
    }
}
