use crate::{
    application::usecases::push_status::PushStatusResponse,
    domain::models::{Message, StatusAction},
    presentation::{
        http::responses::{MessageDto, PushStatusResponseDto},
        models::StatusKindDto,
    },
};

pub fn map_message(message: &Message) -> MessageDto {
    MessageDto {
        id: message.id.clone(),
        to: message.to.clone(),
        from: message.from.clone(),
        direction: message.direction.into(),
        message_type: message.message_type.clone(),
        created_at: message.created_at.to_rfc3339(),
    }
}

pub fn map_status_response(response: &PushStatusResponse) -> PushStatusResponseDto {
    PushStatusResponseDto {
        message_id: response.event.message_id.clone(),
        status: response.event.status.into(),
        error_code: response.event.error_code.clone(),
        wa_id: response.event.wa_id.clone(),
        target_phone: response.event.target_phone.clone(),
    }
}

/// Turns the request's status + optional code into a domain action. A success
/// status silently drops any supplied code; `failed` requires one.
pub fn map_status_action(
    status: StatusKindDto,
    error_code: Option<String>,
) -> Result<StatusAction, &'static str> {
    Ok(match status {
        StatusKindDto::Sent => StatusAction::Sent,
        StatusKindDto::Delivered => StatusAction::Delivered,
        StatusKindDto::Read => StatusAction::Read,
        StatusKindDto::Failed => StatusAction::Failed {
            error_code: error_code.ok_or("error_code is required for failed status")?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_ignore_a_supplied_code() {
        let action = map_status_action(StatusKindDto::Read, Some("131047".to_string())).unwrap();
        assert_eq!(action, StatusAction::Read);
        assert_eq!(action.error_code(), None);
    }

    #[test]
    fn failed_requires_a_code_but_accepts_any_value() {
        assert!(map_status_action(StatusKindDto::Failed, None).is_err());

        let action =
            map_status_action(StatusKindDto::Failed, Some("unknown-code".to_string())).unwrap();
        assert_eq!(action.error_code(), Some("unknown-code"));
    }
}
