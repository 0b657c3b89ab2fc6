//! # Reminders Feature
//!
//! Date-based reminders registered through chat and pushed back to the user when due.
//!
//! - Registration: [`registration::evaluate`] classifies chat text and builds the record.
//! - Delivery: [`ReminderScheduler`] scans the store each tick, keeps the records scheduled
//!   in the last minute, and sends one batched push per user.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Absolute `M/D h:m` dates with one-minute lookback delivery
//! - 1.0.0: Initial release

pub mod command;
pub mod date;
pub mod grouping;
pub mod record;
pub mod registration;
pub mod scheduler;
pub mod window;

pub use command::{parse_command, Command, REGISTER_TOKEN};
pub use date::{validate_date, DateRejection};
pub use grouping::{group_by_user, UserMessageGroup};
pub use record::{ReminderRecord, RowParseError, SheetRow, COLUMN_HEADER};
pub use registration::{evaluate, Registration};
pub use scheduler::{DeliveryReport, ReminderScheduler};
pub use window::MatchWindow;
