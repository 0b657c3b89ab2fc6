//! Date token validation
//!
//! The user never supplies a year: `M/D h:m` is always composed with the year of the
//! reference time. A January date sent in December therefore lands in the past and is
//! rejected rather than rolled over to the next year.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRejection {
    /// The token does not name a real calendar date and time
    InvalidDate,
    /// The composed time is strictly earlier than the reference time
    PastDate,
}

/// Compose a `M/D h:m` token with the year of `now` and require it not to be in the past
pub fn validate_date(date_token: &str, now: NaiveDateTime) -> Result<NaiveDateTime, DateRejection> {
    let candidate = compose(date_token, now.year()).ok_or(DateRejection::InvalidDate)?;
    if candidate < now {
        return Err(DateRejection::PastDate);
    }
    Ok(candidate)
}

fn compose(date_token: &str, year: i32) -> Option<NaiveDateTime> {
    let (date_part, time_part) = date_token.trim().split_once(' ')?;
    let (month, day) = date_part.split_once('/')?;
    let (hour, minute) = time_part.trim().split_once(':')?;

    let date = NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)?;
    let time = NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)?;
    Some(date.and_time(time))
}
