//! Reply text and LINE message limit utilities
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Add batching for the per-request message cap
//! - 1.0.0: Reply texts and text truncation

use crate::core::message::Message;

/// LINE text message limit, counted in characters
pub const TEXT_LIMIT: usize = 5000;
/// Maximum number of messages in one reply or push request
pub const MESSAGES_PER_REQUEST: usize = 5;

pub const REGISTERED_REPLY: &str = "登録しました";
pub const FORMAT_GUIDANCE_REPLY: &str =
    "登録 <日付(月/日 時:分)> <メッセージ>の形式で入力してください";
pub const PAST_DATE_REPLY: &str = "過去の日時が入力されています\n未来の日時を入力してください";
pub const INTERNAL_ERROR_REPLY: &str = "エラーが発生しました。時間をおいて再度お試しください";

/// Truncate text to fit the LINE text limit, adding ellipsis if needed (UTF-8 safe)
pub fn truncate_for_message(text: &str) -> String {
    if text.chars().count() <= TEXT_LIMIT {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(TEXT_LIMIT - 3).collect();
    truncated.push_str("...");
    truncated
}

/// Split messages into request-sized batches, preserving order
pub fn batch_messages(messages: &[Message]) -> Vec<Vec<Message>> {
    messages
        .chunks(MESSAGES_PER_REQUEST)
        .map(|chunk| chunk.iter().map(Message::fit_to_limit).collect())
        .collect()
}
