use poem_openapi::Object;

use crate::presentation::models::{DirectionKind, StatusKindDto};

#[derive(Object)]
pub struct AuthResponseDto {
    pub token: String,
}

#[derive(Object)]
pub struct MessageDto {
    pub id: String,
    pub to: Option<String>,
    pub from: Option<String>,
    pub direction: DirectionKind,
    pub message_type: String,
    pub created_at: String,
}

#[derive(Object)]
pub struct MessagePageDto {
    pub messages: Vec<MessageDto>,
    pub has_more: bool,
}

#[derive(Object)]
pub struct PushStatusResponseDto {
    pub message_id: String,
    pub status: StatusKindDto,
    pub error_code: Option<String>,
    pub wa_id: String,
    pub target_phone: String,
}

#[derive(Object)]
pub struct DeleteMessagesResponseDto {
    pub deleted: u64,
}

#[derive(Object)]
pub struct FailureCodeDto {
    pub code: String,
    pub label: String,
}
