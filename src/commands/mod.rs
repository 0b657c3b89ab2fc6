//! # Command System
//!
//! Prefix-routed text commands received through the chat webhook.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;

// Re-export the CommandHandler from the handler module
pub use crate::command_handler::CommandHandler;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use handler::{Reply, TextCommandHandler};
pub use registry::CommandRegistry;
