//! # Configuration
//!
//! Environment-driven bot configuration. `.env` files are loaded by the binary via dotenvy
//! before [`Config::from_env`] runs.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Context, Result};
use chrono::FixedOffset;

use crate::features::reminders::window::LOOKBACK_MINUTES;

pub const DEFAULT_LINE_API_BASE: &str = "https://api.line.me";
pub const DEFAULT_DATABASE_PATH: &str = "reminders.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Asia/Tokyo
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;
pub const DEFAULT_DELIVERY_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub line_channel_access_token: String,
    pub line_api_base: String,
    pub calendar: Option<CalendarConfig>,
    pub database_path: String,
    pub bind_addr: String,
    pub log_level: String,
    pub utc_offset_hours: i32,
    pub delivery_interval_secs: u64,
}

/// Google Calendar credentials; both values must be present to enable calendar entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    pub calendar_id: String,
    pub access_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let line_channel_access_token = get("LINE_CHANNEL_ACCESS_TOKEN")
            .ok_or_else(|| anyhow!("LINE_CHANNEL_ACCESS_TOKEN must be set"))?;

        let calendar = match (get("CALENDAR_ID"), get("GOOGLE_CALENDAR_TOKEN")) {
            (Some(calendar_id), Some(access_token)) => Some(CalendarConfig {
                calendar_id,
                access_token,
            }),
            _ => None,
        };

        let utc_offset_hours = match get("REMINDER_UTC_OFFSET_HOURS") {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .with_context(|| format!("Invalid REMINDER_UTC_OFFSET_HOURS: {raw}"))?,
            None => DEFAULT_UTC_OFFSET_HOURS,
        };
        if !(-23..=23).contains(&utc_offset_hours) {
            return Err(anyhow!(
                "REMINDER_UTC_OFFSET_HOURS out of range (-23..=23): {utc_offset_hours}"
            ));
        }

        let delivery_interval_secs = match get("DELIVERY_INTERVAL_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid DELIVERY_INTERVAL_SECS: {raw}"))?,
            None => DEFAULT_DELIVERY_INTERVAL_SECS,
        };
        if delivery_interval_secs == 0 {
            return Err(anyhow!("DELIVERY_INTERVAL_SECS must be greater than zero"));
        }
        // A longer gap than the lookback window would skip reminders between runs
        let max_interval_secs = (LOOKBACK_MINUTES * 60) as u64;
        if delivery_interval_secs > max_interval_secs {
            return Err(anyhow!(
                "DELIVERY_INTERVAL_SECS must not exceed {max_interval_secs}: {delivery_interval_secs}"
            ));
        }

        Ok(Config {
            line_channel_access_token,
            line_api_base: get("LINE_API_BASE")
                .unwrap_or_else(|| DEFAULT_LINE_API_BASE.to_string()),
            calendar,
            database_path: get("DATABASE_PATH")
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            utc_offset_hours,
            delivery_interval_secs,
        })
    }

    /// Fixed offset used for all wall-clock reminder times
    pub fn timezone(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .ok_or_else(|| anyhow!("Invalid UTC offset: {} hours", self.utc_offset_hours))
    }
}
