// Core layer - shared types and configuration
pub mod core;

// Features layer - reminder parsing, matching and delivery
pub mod features;

// Infrastructure - row store, calendar and chat platform clients
pub mod calendar;
pub mod database;
pub mod line;

// Application layer
pub mod command_handler;
pub mod commands;
pub mod server;

// Re-export core config
pub use crate::core::Config;

// Re-export feature items
pub use features::reminders::{
    evaluate, group_by_user, parse_command, validate_date, Command, DateRejection,
    DeliveryReport, MatchWindow, Registration, ReminderRecord, ReminderScheduler, SheetRow,
};
