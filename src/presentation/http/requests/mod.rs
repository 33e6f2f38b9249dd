use poem_openapi::Object;

use crate::presentation::models::StatusKindDto;

#[derive(Object, Debug)]
pub struct LoginRequestDto {
    #[oai(validator(min_length = 1))]
    pub email: String,
    #[oai(validator(min_length = 1))]
    pub password: String,
}

#[derive(Object, Debug)]
pub struct PushStatusRequestDto {
    #[oai(validator(min_length = 1))]
    pub phone_number_id: String,
    #[oai(validator(min_length = 1))]
    pub business_account_id: String,
    #[oai(validator(min_length = 1))]
    pub message_id: String,
    pub status: StatusKindDto,
    /// Required for `failed`, ignored for success statuses.
    pub error_code: Option<String>,
}

#[derive(Object, Debug)]
pub struct DeleteMessagesRequestDto {
    #[oai(validator(min_length = 1))]
    pub phone_number_id: String,
    pub message_ids: Vec<String>,
}
