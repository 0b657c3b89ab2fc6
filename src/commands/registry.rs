//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::sync::Arc;

use super::handler::TextCommandHandler;

/// Registry mapping prefix tokens to handlers
///
/// Lookup is a whole-string prefix match against the incoming text. When several
/// prefixes match, the longest one wins.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(RemindHandler));
///
/// if let Some(handler) = registry.find("登録 12/25 09:30 忘れずに") {
///     handler.handle(ctx, &event, now).await?;
/// }
/// ```
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: Vec<(&'static str, Arc<dyn TextCommandHandler>)>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler for its declared prefixes
    pub fn register(&mut self, handler: Arc<dyn TextCommandHandler>) {
        for prefix in handler.prefixes() {
            self.handlers.push((*prefix, Arc::clone(&handler)));
        }
    }

    /// Handler whose prefix the text starts with
    pub fn find(&self, text: &str) -> Option<Arc<dyn TextCommandHandler>> {
        self.handlers
            .iter()
            .filter(|(prefix, _)| text.starts_with(prefix))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, handler)| Arc::clone(handler))
    }

    /// Number of registered prefixes
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::CommandContext;
    use crate::commands::handler::Reply;
    use crate::line::TextEvent;
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::NaiveDateTime;

    // Mock handler for testing
    struct MockHandler {
        prefixes: &'static [&'static str],
    }

    #[async_trait]
    impl TextCommandHandler for MockHandler {
        fn prefixes(&self) -> &'static [&'static str] {
            self.prefixes
        }

        async fn handle(
            &self,
            _ctx: Arc<CommandContext>,
            _event: &TextEvent,
            _now: NaiveDateTime,
        ) -> Result<Reply> {
            Ok(Reply::SendError)
        }
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_find_by_prefix() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler { prefixes: &["登録"] }));

        assert_eq!(registry.len(), 1);
        assert!(registry.find("登録 12/25 09:30 x").is_some());
        assert!(registry.find("登録").is_some());
        assert!(registry.find("こんにちは").is_none());
        assert!(registry.find("再登録").is_none());
    }

    #[test]
    fn test_longest_prefix_wins() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler { prefixes: &["登"] }));
        registry.register(Arc::new(MockHandler {
            prefixes: &["登録", "register"],
        }));

        assert_eq!(registry.len(), 3);
        let handler = registry.find("登録 x").unwrap();
        assert_eq!(handler.prefixes(), &["登録", "register"]);
    }
}
