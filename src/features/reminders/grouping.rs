//! Per-user message batching

use std::collections::HashMap;

use super::record::ReminderRecord;
use crate::core::Message;

/// Messages to push, keyed by user id. Each list keeps scan order.
pub type UserMessageGroup = HashMap<String, Vec<Message>>;

/// Fold matched records into one ordered message list per user
pub fn group_by_user<'a, I>(records: I) -> UserMessageGroup
where
    I: IntoIterator<Item = &'a ReminderRecord>,
{
    records
        .into_iter()
        .fold(UserMessageGroup::new(), |mut group, record| {
            group
                .entry(record.user_id.clone())
                .or_default()
                .push(Message::text(record.message.clone()));
            group
        })
}
