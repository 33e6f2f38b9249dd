use async_trait::async_trait;

use crate::domain::models::Message;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Newest-first page of messages for a phone number. The boolean is true
    /// when more rows exist past the requested window.
    async fn list(
        &self,
        phone_number_id: &str,
        limit: u32,
        offset: u32,
    ) -> anyhow::Result<(Vec<Message>, bool)>;

    /// Removes the given messages, returning how many rows were deleted.
    async fn delete(&self, phone_number_id: &str, message_ids: &[String]) -> anyhow::Result<u64>;
}
