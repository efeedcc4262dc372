use async_trait::async_trait;

use crate::{domain::ChatId, Result};

/// Port for the homework review API.
///
/// One call is one poll: a single GET bounded by `from_date`. The payload is
/// returned untyped; shape checks live in [`crate::response`] so that schema
/// violations map to specific error kinds instead of one opaque parse error.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value>;
}

/// Port for messaging.
///
/// Telegram is the first implementation; the shape is deliberately minimal so
/// another messenger can fit behind the same interface. Dedup semantics are
/// owned by the caller; an implementation is stateless per call.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;
}
