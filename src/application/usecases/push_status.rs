use std::sync::Arc;

use crate::{
    application::services::{
        message_store::MessageListStore,
        webhook::{DispatchAck, WebhookDispatcher},
    },
    domain::{
        errors::StatusActionError,
        events::{StatusEvent, WebhookContext},
        models::{Message, StatusAction},
    },
};

pub struct PushStatusUseCase {
    store: Arc<MessageListStore>,
    dispatcher: Arc<dyn WebhookDispatcher>,
}

pub struct PushStatusRequest {
    pub phone_number_id: String,
    pub business_account_id: String,
    pub message_id: String,
    pub action: StatusAction,
}

pub struct PushStatusResponse {
    pub event: StatusEvent,
    pub ack: DispatchAck,
}

impl PushStatusUseCase {
    pub fn new(store: Arc<MessageListStore>, dispatcher: Arc<dyn WebhookDispatcher>) -> Self {
        Self { store, dispatcher }
    }

    /// Build → dispatch → refresh. A builder failure aborts before any
    /// dispatch; a dispatch failure aborts before any refresh. Every failure
    /// is returned to the caller, nothing is swallowed here.
    pub async fn execute(
        &self,
        request: PushStatusRequest,
    ) -> Result<PushStatusResponse, StatusActionError> {
        let message = self
            .resolve_message(&request.phone_number_id, &request.message_id)
            .await?;

        let context = WebhookContext {
            phone_number_id: request.phone_number_id.clone(),
            business_account_id: request.business_account_id,
        };
        let event = StatusEvent::build(&message, &context, request.action)?;

        let ack = self.dispatcher.send(&event).await?;
        tracing::info!(
            message_id = %event.message_id,
            status = event.status.as_str(),
            "status event dispatched"
        );

        self.store.refresh(&request.phone_number_id).await?;

        Ok(PushStatusResponse { event, ack })
    }

    async fn resolve_message(
        &self,
        phone_number_id: &str,
        message_id: &str,
    ) -> Result<Message, StatusActionError> {
        if let Some(message) = self.store.find(phone_number_id, message_id).await {
            return Ok(message);
        }

        self.store.refresh(phone_number_id).await?;
        self.store
            .find(phone_number_id, message_id)
            .await
            .ok_or_else(|| StatusActionError::MessageNotFound(message_id.to_string()))
    }
}
