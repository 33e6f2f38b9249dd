use std::sync::Arc;

use crate::{
    application::services::message_store::MessageListStore,
    domain::{errors::DeleteMessagesError, repositories::MessageRepository},
};

pub struct DeleteMessagesUseCase {
    repo: Arc<dyn MessageRepository>,
    store: Arc<MessageListStore>,
}

pub struct DeleteMessagesRequest {
    pub phone_number_id: String,
    pub message_ids: Vec<String>,
}

impl DeleteMessagesUseCase {
    pub fn new(repo: Arc<dyn MessageRepository>, store: Arc<MessageListStore>) -> Self {
        Self { repo, store }
    }

    pub async fn execute(&self, request: DeleteMessagesRequest) -> Result<u64, DeleteMessagesError> {
        if request.message_ids.is_empty() {
            return Err(DeleteMessagesError::EmptySelection);
        }

        let deleted = self
            .repo
            .delete(&request.phone_number_id, &request.message_ids)
            .await
            .map_err(DeleteMessagesError::Repository)?;
        tracing::info!(
            phone_number_id = %request.phone_number_id,
            deleted,
            "messages deleted"
        );

        self.store.refresh(&request.phone_number_id).await?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::domain::models::{Direction, Message};
    use crate::infrastructure::repositories::in_memory::InMemoryMessageRepository;

    struct BrokenRepository;

    #[async_trait]
    impl MessageRepository for BrokenRepository {
        async fn list(
            &self,
            _phone_number_id: &str,
            _limit: u32,
            _offset: u32,
        ) -> anyhow::Result<(Vec<Message>, bool)> {
            anyhow::bail!("connection reset by peer")
        }

        async fn delete(
            &self,
            _phone_number_id: &str,
            _message_ids: &[String],
        ) -> anyhow::Result<u64> {
            anyhow::bail!("connection reset by peer")
        }
    }

    fn message(id: &str) -> Message {
        Message {
            id: id.to_string(),
            phone_number_id: "106".to_string(),
            to: Some("12345".to_string()),
            from: Some("999".to_string()),
            direction: Direction::Incoming,
            conversation: None,
            message_type: "text".to_string(),
            created_at: Utc::now(),
        }
    }

    fn request(message_ids: Vec<String>) -> DeleteMessagesRequest {
        DeleteMessagesRequest {
            phone_number_id: "106".to_string(),
            message_ids,
        }
    }

    #[tokio::test]
    async fn deletes_and_refreshes_the_page() {
        let repo = Arc::new(InMemoryMessageRepository::new());
        let store = Arc::new(MessageListStore::new(repo.clone(), 10));
        repo.insert(message("1")).await;
        repo.insert(message("2")).await;
        store.refresh("106").await.unwrap();

        let usecase = DeleteMessagesUseCase::new(repo, store.clone());
        let deleted = usecase
            .execute(request(vec!["1".to_string()]))
            .await
            .unwrap();

        assert_eq!(deleted, 1);
        let page = store.page("106").await.unwrap();
        assert_eq!(page.messages.len(), 1);
        assert_eq!(page.messages[0].id, "2");
    }

    #[tokio::test]
    async fn empty_selection_is_rejected_before_touching_the_repo() {
        let repo = Arc::new(InMemoryMessageRepository::new());
        let store = Arc::new(MessageListStore::new(repo.clone(), 10));
        let usecase = DeleteMessagesUseCase::new(repo, store);

        let result = usecase.execute(request(Vec::new())).await;

        assert!(matches!(result, Err(DeleteMessagesError::EmptySelection)));
    }

    #[tokio::test]
    async fn repository_failures_are_not_validation_errors() {
        let repo = Arc::new(BrokenRepository);
        let store = Arc::new(MessageListStore::new(repo.clone(), 10));
        let usecase = DeleteMessagesUseCase::new(repo, store);

        let result = usecase.execute(request(vec!["1".to_string()])).await;

        assert!(matches!(result, Err(DeleteMessagesError::Repository(_))));
    }
}
