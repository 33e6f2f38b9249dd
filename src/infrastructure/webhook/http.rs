use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    application::services::webhook::{DispatchAck, WebhookDispatcher},
    domain::{errors::DispatchError, events::StatusEvent},
};

pub struct HttpWebhookDispatcher {
    http: Client,
    endpoint: String,
}

impl HttpWebhookDispatcher {
    pub fn new(endpoint: String) -> Arc<dyn WebhookDispatcher> {
        Arc::new(Self {
            http: Client::builder()
                .user_agent("wba-console/webhook")
                .build()
                .expect("failed to build webhook http client"),
            endpoint,
        }) as Arc<dyn WebhookDispatcher>
    }
}

#[async_trait]
impl WebhookDispatcher for HttpWebhookDispatcher {
    async fn send(&self, event: &StatusEvent) -> Result<DispatchAck, DispatchError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(event)
            .send()
            .await
            .map_err(|err| DispatchError::Transport(err.into()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "webhook endpoint rejected event");
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(DispatchAck {
            status: status.as_u16(),
        })
    }
}
