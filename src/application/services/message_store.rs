use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{errors::RefreshError, models::Message, repositories::MessageRepository};

#[derive(Debug, Clone, Default)]
pub struct PageSnapshot {
    pub messages: Vec<Message>,
    pub has_more: bool,
}

/// Latest fetched page of messages per phone number. `refresh` is the only
/// writer; it replaces the whole snapshot, so readers never observe a
/// partially updated page.
pub struct MessageListStore {
    repo: Arc<dyn MessageRepository>,
    page_size: u32,
    pages: RwLock<HashMap<String, PageSnapshot>>,
}

impl MessageListStore {
    pub fn new(repo: Arc<dyn MessageRepository>, page_size: u32) -> Self {
        Self {
            repo,
            page_size,
            pages: RwLock::new(HashMap::new()),
        }
    }

    /// Reloads the first page for a phone number. Safe to call repeatedly.
    pub async fn refresh(&self, phone_number_id: &str) -> Result<PageSnapshot, RefreshError> {
        let (messages, has_more) = self
            .repo
            .list(phone_number_id, self.page_size, 0)
            .await
            .map_err(RefreshError)?;
        let snapshot = PageSnapshot { messages, has_more };

        let mut pages = self.pages.write().await;
        pages.insert(phone_number_id.to_string(), snapshot.clone());
        Ok(snapshot)
    }

    pub async fn page(&self, phone_number_id: &str) -> Option<PageSnapshot> {
        let pages = self.pages.read().await;
        pages.get(phone_number_id).cloned()
    }

    pub async fn find(&self, phone_number_id: &str, message_id: &str) -> Option<Message> {
        let pages = self.pages.read().await;
        pages
            .get(phone_number_id)?
            .messages
            .iter()
            .find(|m| m.id == message_id)
            .cloned()
    }
}
