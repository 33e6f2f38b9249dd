use async_trait::async_trait;

use crate::domain::{errors::DispatchError, events::StatusEvent};

/// Acknowledgement from the webhook endpoint.
#[derive(Debug, Clone, Copy)]
pub struct DispatchAck {
    pub status: u16,
}

/// Delivers a built status event to the backend webhook endpoint. One shot:
/// no internal retries, no cancellation once a send has started.
#[async_trait]
pub trait WebhookDispatcher: Send + Sync {
    async fn send(&self, event: &StatusEvent) -> Result<DispatchAck, DispatchError>;
}
