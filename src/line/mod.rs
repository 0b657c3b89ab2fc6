//! # LINE Platform
//!
//! Messaging API client and webhook payload types.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod client;
pub mod webhook;

pub use client::{LineClient, PushDispatcher, ReplySender};
pub use webhook::{TextEvent, WebhookBody, WebhookEvent};
