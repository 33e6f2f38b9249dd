use std::sync::Arc;

use crate::{
    application::services::message_store::{MessageListStore, PageSnapshot},
    domain::errors::RefreshError,
};

pub struct ListMessagesUseCase {
    store: Arc<MessageListStore>,
}

impl ListMessagesUseCase {
    pub fn new(store: Arc<MessageListStore>) -> Self {
        Self { store }
    }

    /// Reloads and returns the latest page for a phone number.
    pub async fn execute(&self, phone_number_id: &str) -> Result<PageSnapshot, RefreshError> {
        self.store.refresh(phone_number_id).await
    }
}
