//! # Calendar Mirror
//!
//! Best-effort calendar entry for every registered reminder. The entry spans a fixed
//! 30 minutes starting at the reminder time.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{Duration, FixedOffset, NaiveDateTime, TimeZone};
use log::{debug, info};
use serde::Serialize;

use crate::core::config::CalendarConfig;

pub const EVENT_DURATION_MINUTES: i64 = 30;
const GOOGLE_CALENDAR_API: &str = "https://www.googleapis.com/calendar/v3";

/// End of the calendar entry for a reminder starting at `begin`
pub fn event_end(begin: NaiveDateTime) -> NaiveDateTime {
    begin + Duration::minutes(EVENT_DURATION_MINUTES)
}

#[async_trait]
pub trait CalendarClient: Send + Sync {
    async fn create_event(
        &self,
        title: &str,
        begin: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<()>;
}

/// Used when no calendar is configured
pub struct DisabledCalendar;

#[async_trait]
impl CalendarClient for DisabledCalendar {
    async fn create_event(
        &self,
        title: &str,
        begin: NaiveDateTime,
        _end: NaiveDateTime,
    ) -> Result<()> {
        debug!("Calendar disabled, skipping event '{title}' at {begin}");
        Ok(())
    }
}

pub struct GoogleCalendarClient {
    http: reqwest::Client,
    config: CalendarConfig,
    offset: FixedOffset,
}

#[derive(Debug, Serialize)]
struct EventTime {
    #[serde(rename = "dateTime")]
    date_time: String,
}

#[derive(Debug, Serialize)]
struct EventRequest<'a> {
    summary: &'a str,
    start: EventTime,
    end: EventTime,
}

impl GoogleCalendarClient {
    pub fn new(config: CalendarConfig, offset: FixedOffset) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            offset,
        }
    }

    fn events_url(&self) -> String {
        format!(
            "{}/calendars/{}/events",
            GOOGLE_CALENDAR_API,
            urlencoding::encode(&self.config.calendar_id)
        )
    }

    fn rfc3339(&self, at: NaiveDateTime) -> Result<String> {
        self.offset
            .from_local_datetime(&at)
            .single()
            .map(|dt| dt.to_rfc3339())
            .ok_or_else(|| anyhow!("Cannot place {at} in offset {}", self.offset))
    }

    fn build_request<'a>(
        &self,
        title: &'a str,
        begin: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<EventRequest<'a>> {
        Ok(EventRequest {
            summary: title,
            start: EventTime {
                date_time: self.rfc3339(begin)?,
            },
            end: EventTime {
                date_time: self.rfc3339(end)?,
            },
        })
    }
}

#[async_trait]
impl CalendarClient for GoogleCalendarClient {
    async fn create_event(
        &self,
        title: &str,
        begin: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<()> {
        let body = self.build_request(title, begin, end)?;

        let response = self
            .http
            .post(self.events_url())
            .bearer_auth(&self.config.access_token)
            .json(&body)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .context("Calendar request failed")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Calendar API error {status}: {text}"));
        }

        info!("📅 Calendar event created: {title} ({begin} - {end})");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 25)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn client() -> GoogleCalendarClient {
        GoogleCalendarClient::new(
            CalendarConfig {
                calendar_id: "team@group.calendar.google.com".to_string(),
                access_token: "token".to_string(),
            },
            FixedOffset::east_opt(9 * 3600).unwrap(),
        )
    }

    #[test]
    fn test_event_end_is_thirty_minutes_later() {
        assert_eq!(event_end(at(9, 30)), at(10, 0));
        assert_eq!(event_end(at(23, 45)), at(23, 45) + Duration::minutes(30));
    }

    #[test]
    fn test_request_body_uses_offset() {
        let body = client()
            .build_request("忘れずに", at(9, 30), event_end(at(9, 30)))
            .unwrap();
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "summary": "忘れずに",
                "start": {"dateTime": "2024-12-25T09:30:00+09:00"},
                "end": {"dateTime": "2024-12-25T10:00:00+09:00"},
            })
        );
    }

    #[test]
    fn test_events_url_encodes_calendar_id() {
        assert_eq!(
            client().events_url(),
            "https://www.googleapis.com/calendar/v3/calendars/team%40group.calendar.google.com/events"
        );

        let odd = GoogleCalendarClient::new(
            CalendarConfig {
                calendar_id: "家族 予定/#1".to_string(),
                access_token: "token".to_string(),
            },
            FixedOffset::east_opt(9 * 3600).unwrap(),
        );
        assert_eq!(
            odd.events_url(),
            "https://www.googleapis.com/calendar/v3/calendars/%E5%AE%B6%E6%97%8F%20%E4%BA%88%E5%AE%9A%2F%231/events"
        );
    }

    #[tokio::test]
    async fn test_disabled_calendar_succeeds() {
        assert!(DisabledCalendar
            .create_event("x", at(9, 0), at(9, 30))
            .await
            .is_ok());
    }
}
