use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{models::Message, repositories::MessageRepository};

#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a message, minting an id when the caller left it empty.
    pub async fn insert(&self, mut message: Message) -> Message {
        if message.id.is_empty() {
            message.id = Uuid::new_v4().to_string();
        }
        let mut messages = self.messages.write().await;
        messages.push(message.clone());
        message
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn list(
        &self,
        phone_number_id: &str,
        limit: u32,
        offset: u32,
    ) -> anyhow::Result<(Vec<Message>, bool)> {
        let messages = self.messages.read().await;
        let mut matching: Vec<Message> = messages
            .iter()
            .filter(|m| m.phone_number_id == phone_number_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len();
        let page: Vec<Message> = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        let has_more = total > (offset as usize).saturating_add(limit as usize);

        Ok((page, has_more))
    }

    async fn delete(&self, phone_number_id: &str, message_ids: &[String]) -> anyhow::Result<u64> {
        let mut messages = self.messages.write().await;
        let before = messages.len();
        messages.retain(|m| {
            !(m.phone_number_id == phone_number_id && message_ids.contains(&m.id))
        });
        Ok((before - messages.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::models::Direction;

    fn message(id: &str, phone_number_id: &str, age_minutes: i64) -> Message {
        Message {
            id: id.to_string(),
            phone_number_id: phone_number_id.to_string(),
            to: Some("12345".to_string()),
            from: Some("999".to_string()),
            direction: Direction::Incoming,
            conversation: None,
            message_type: "text".to_string(),
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[tokio::test]
    async fn lists_newest_first_with_has_more() {
        let repo = InMemoryMessageRepository::new();
        repo.insert(message("old", "106", 10)).await;
        repo.insert(message("new", "106", 0)).await;
        repo.insert(message("other", "107", 0)).await;

        let (page, has_more) = repo.list("106", 1, 0).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "new");
        assert!(has_more);

        let (rest, has_more) = repo.list("106", 1, 1).await.unwrap();
        assert_eq!(rest[0].id, "old");
        assert!(!has_more);
    }

    #[tokio::test]
    async fn insert_mints_an_id_when_empty() {
        let repo = InMemoryMessageRepository::new();
        let stored = repo.insert(message("", "106", 0)).await;
        assert!(!stored.id.is_empty());
    }

    #[tokio::test]
    async fn delete_is_scoped_to_the_phone_number() {
        let repo = InMemoryMessageRepository::new();
        repo.insert(message("1", "106", 0)).await;
        repo.insert(message("1", "107", 0)).await;

        let deleted = repo
            .delete("106", &["1".to_string(), "missing".to_string()])
            .await
            .unwrap();
        assert_eq!(deleted, 1);

        let (remaining, _) = repo.list("107", 10, 0).await.unwrap();
        assert_eq!(remaining.len(), 1);
    }
}
