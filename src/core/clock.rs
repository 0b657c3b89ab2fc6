//! Wall-clock access. Everything below the binary and the scheduler loop takes "now" as an
//! argument instead of calling this.

use chrono::{FixedOffset, NaiveDateTime, Utc};

/// Current local time in the bot's configured offset
pub fn local_now(offset: &FixedOffset) -> NaiveDateTime {
    Utc::now().with_timezone(offset).naive_local()
}
