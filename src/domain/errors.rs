use thiserror::Error;

/// The stored conversation string was not parseable as a structured record.
/// Raised by the event builder before any dispatch happens.
#[derive(Debug, Error)]
#[error("conversation payload is not valid JSON: {source}")]
pub struct MalformedConversationError {
    #[from]
    source: serde_json::Error,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("webhook transport failure: {0}")]
    Transport(anyhow::Error),
    #[error("webhook endpoint rejected event with status {status}")]
    Rejected { status: u16 },
}

/// Reloading the message list failed. Kept distinct from [`DispatchError`]
/// because the two surface differently to the operator.
#[derive(Debug, Error)]
#[error("failed to refresh message list: {0}")]
pub struct RefreshError(pub anyhow::Error);

#[derive(Debug, Error)]
pub enum DeleteMessagesError {
    #[error("message_ids cannot be empty")]
    EmptySelection,
    #[error("failed to delete messages: {0}")]
    Repository(anyhow::Error),
    #[error(transparent)]
    Refresh(#[from] RefreshError),
}

#[derive(Debug, Error)]
pub enum StatusActionError {
    #[error("message {0} not found for this phone number")]
    MessageNotFound(String),
    #[error(transparent)]
    MalformedConversation(#[from] MalformedConversationError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Refresh(#[from] RefreshError),
}
