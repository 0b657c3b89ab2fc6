//! Pure evaluation of a registration attempt

use chrono::NaiveDateTime;

use super::command::{parse_command, Command};
use super::date::{validate_date, DateRejection};
use super::record::ReminderRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    NotRegistration,
    /// Grammar mismatch, or a token that is not a real date
    Malformed,
    PastDate,
    Accepted(ReminderRecord),
}

/// Classify `text` sent by `user_id` at `now` and build the record if it is acceptable
pub fn evaluate(text: &str, user_id: &str, now: NaiveDateTime) -> Registration {
    let (date_token, message) = match parse_command(text) {
        Command::NotRegistration => return Registration::NotRegistration,
        Command::MalformedCommand => return Registration::Malformed,
        Command::RegistrationCommand {
            date_token,
            message,
        } => (date_token, message),
    };

    match validate_date(&date_token, now) {
        Ok(scheduled_at) => {
            Registration::Accepted(ReminderRecord::new(user_id, message, scheduled_at, now))
        }
        Err(DateRejection::InvalidDate) => Registration::Malformed,
        Err(DateRejection::PastDate) => Registration::PastDate,
    }
}
