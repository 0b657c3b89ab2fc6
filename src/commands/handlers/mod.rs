//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod remind;

use std::sync::Arc;

use super::handler::TextCommandHandler;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn TextCommandHandler>> {
    vec![Arc::new(remind::RemindHandler)]
}
