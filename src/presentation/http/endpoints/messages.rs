use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, param::Query, payload::Json};

use crate::{
    application::usecases::{
        delete_messages::DeleteMessagesRequest, push_status::PushStatusRequest,
    },
    domain::{
        errors::{DeleteMessagesError, StatusActionError},
        models::KNOWN_FAILURE_CODES,
    },
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{map_message, map_status_action, map_status_response},
        requests::{DeleteMessagesRequestDto, PushStatusRequestDto},
        responses::{
            DeleteMessagesResponseDto, FailureCodeDto, MessagePageDto, PushStatusResponseDto,
        },
        security::JwtAuth,
    },
};

pub struct MessagesEndpoints {
    state: Arc<ApiState>,
}

impl MessagesEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl MessagesEndpoints {
    #[oai(
        path = "/messages",
        method = "get",
        tag = EndpointsTags::Messages,
    )]
    pub async fn list_messages(
        &self,
        auth: JwtAuth,
        phone_number_id: Query<String>,
    ) -> PoemResult<Json<MessagePageDto>> {
        auth.into_admin(&self.state.jwt_config)?;

        let page = self
            .state
            .list_messages_usecase
            .execute(&phone_number_id.0)
            .await
            .map_err(|err| internal_error(err.into()))?;

        Ok(Json(MessagePageDto {
            messages: page.messages.iter().map(map_message).collect(),
            has_more: page.has_more,
        }))
    }

    #[oai(
        path = "/messages/actions/status",
        method = "post",
        tag = EndpointsTags::Messages,
    )]
    pub async fn push_status(
        &self,
        auth: JwtAuth,
        request: Json<PushStatusRequestDto>,
    ) -> PoemResult<Json<PushStatusResponseDto>> {
        auth.into_admin(&self.state.jwt_config)?;

        let action = map_status_action(request.status, request.error_code.clone())
            .map_err(|reason| poem::Error::from_string(reason, poem::http::StatusCode::BAD_REQUEST))?;

        let response = self
            .state
            .push_status_usecase
            .execute(PushStatusRequest {
                phone_number_id: request.phone_number_id.clone(),
                business_account_id: request.business_account_id.clone(),
                message_id: request.message_id.clone(),
                action,
            })
            .await
            .map_err(status_action_error)?;

        Ok(Json(map_status_response(&response)))
    }

    #[oai(
        path = "/messages/actions/delete",
        method = "post",
        tag = EndpointsTags::Messages,
    )]
    pub async fn delete_messages(
        &self,
        auth: JwtAuth,
        request: Json<DeleteMessagesRequestDto>,
    ) -> PoemResult<Json<DeleteMessagesResponseDto>> {
        auth.into_admin(&self.state.jwt_config)?;

        let deleted = self
            .state
            .delete_messages_usecase
            .execute(DeleteMessagesRequest {
                phone_number_id: request.phone_number_id.clone(),
                message_ids: request.message_ids.clone(),
            })
            .await
            .map_err(delete_messages_error)?;

        Ok(Json(DeleteMessagesResponseDto { deleted }))
    }

    #[oai(
        path = "/messages/failure-codes",
        method = "get",
        tag = EndpointsTags::Messages,
    )]
    pub async fn failure_codes(&self, auth: JwtAuth) -> PoemResult<Json<Vec<FailureCodeDto>>> {
        auth.into_admin(&self.state.jwt_config)?;

        Ok(Json(
            KNOWN_FAILURE_CODES
                .iter()
                .map(|(code, label)| FailureCodeDto {
                    code: (*code).to_string(),
                    label: (*label).to_string(),
                })
                .collect(),
        ))
    }
}

fn status_action_error(err: StatusActionError) -> poem::Error {
    let status = match &err {
        StatusActionError::MessageNotFound(_) => poem::http::StatusCode::NOT_FOUND,
        StatusActionError::MalformedConversation(_) => poem::http::StatusCode::UNPROCESSABLE_ENTITY,
        StatusActionError::Dispatch(_) => poem::http::StatusCode::BAD_GATEWAY,
        StatusActionError::Refresh(_) => poem::http::StatusCode::INTERNAL_SERVER_ERROR,
    };
    poem::Error::from_string(err.to_string(), status)
}

fn delete_messages_error(err: DeleteMessagesError) -> poem::Error {
    let status = match &err {
        DeleteMessagesError::EmptySelection => poem::http::StatusCode::BAD_REQUEST,
        DeleteMessagesError::Repository(_) | DeleteMessagesError::Refresh(_) => {
            poem::http::StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    poem::Error::from_string(err.to_string(), status)
}

fn internal_error(err: anyhow::Error) -> poem::Error {
    poem::Error::from_string(
        err.to_string(),
        poem::http::StatusCode::INTERNAL_SERVER_ERROR,
    )
}
