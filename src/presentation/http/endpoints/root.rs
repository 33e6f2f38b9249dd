use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::services::jwt::JwtServiceConfig;
use crate::application::usecases::{
    delete_messages::DeleteMessagesUseCase, list_messages::ListMessagesUseCase,
    push_status::PushStatusUseCase,
};
use crate::config::AdminCredentials;

#[derive(Clone)]
pub struct ApiState {
    pub push_status_usecase: Arc<PushStatusUseCase>,
    pub list_messages_usecase: Arc<ListMessagesUseCase>,
    pub delete_messages_usecase: Arc<DeleteMessagesUseCase>,
    pub jwt_config: JwtServiceConfig,
    pub admin: AdminCredentials,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Auth,
    Messages,
}
