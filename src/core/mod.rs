//! # Core Module
//!
//! Configuration, clock access, message payloads and reply texts shared by the
//! registration and delivery flows.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod clock;
pub mod config;
pub mod message;
pub mod response;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used items
pub use config::Config;
pub use message::Message;
pub use response::{
    batch_messages, truncate_for_message, FORMAT_GUIDANCE_REPLY, INTERNAL_ERROR_REPLY,
    MESSAGES_PER_REQUEST, PAST_DATE_REPLY, REGISTERED_REPLY, TEXT_LIMIT,
};
