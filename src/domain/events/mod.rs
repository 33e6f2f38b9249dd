use serde::Serialize;

use crate::domain::errors::MalformedConversationError;
use crate::domain::models::{Conversation, ConversationField, Direction, Message, StatusAction, StatusKind};

/// Identifiers of the WhatsApp Business account the console is operating on.
/// Supplied by the caller, never derived from a message.
#[derive(Debug, Clone)]
pub struct WebhookContext {
    pub phone_number_id: String,
    pub business_account_id: String,
}

/// One simulated status-webhook event. Built fresh per action, handed to the
/// dispatcher and discarded; never persisted.
///
/// Serializes to the flat wire shape the webhook endpoint expects:
/// `{type, error_code?, messageId, wa_id, conversation, phone_number_id,
/// business_account_id, to}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusEvent {
    #[serde(rename = "type")]
    pub status: StatusKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(rename = "messageId")]
    pub message_id: String,
    pub wa_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation: Option<Conversation>,
    pub phone_number_id: String,
    pub business_account_id: String,
    #[serde(rename = "to")]
    pub target_phone: String,
}

impl StatusEvent {
    /// Builds a status event from a message record. Pure, no side effects.
    ///
    /// - `target_phone` is `to` with all whitespace removed; a missing `to`
    ///   becomes the empty string, not an error.
    /// - `wa_id` is `from` for incoming messages, `to` otherwise, untouched.
    /// - A string-form conversation is parsed here; the dispatcher only ever
    ///   sees the structured record.
    pub fn build(
        message: &Message,
        context: &WebhookContext,
        action: StatusAction,
    ) -> Result<StatusEvent, MalformedConversationError> {
        let conversation = match &message.conversation {
            Some(ConversationField::Record(record)) => Some(record.clone()),
            Some(ConversationField::Raw(raw)) => Some(serde_json::from_str(raw)?),
            None => None,
        };

        let wa_id = match message.direction {
            Direction::Incoming => message.from.clone().unwrap_or_default(),
            Direction::Outgoing => message.to.clone().unwrap_or_default(),
        };

        Ok(StatusEvent {
            status: action.kind(),
            error_code: action.error_code().map(str::to_owned),
            message_id: message.id.clone(),
            wa_id,
            conversation,
            phone_number_id: context.phone_number_id.clone(),
            business_account_id: context.business_account_id.clone(),
            target_phone: strip_whitespace(message.to.as_deref().unwrap_or("")),
        })
    }
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::Map;

    use super::*;
    use crate::domain::models::ConversationOrigin;

    fn context() -> WebhookContext {
        WebhookContext {
            phone_number_id: "106540352242922".to_string(),
            business_account_id: "102290129340398".to_string(),
        }
    }

    fn message(direction: Direction) -> Message {
        Message {
            id: "7".to_string(),
            phone_number_id: "106540352242922".to_string(),
            to: Some("12 345".to_string()),
            from: Some("999".to_string()),
            direction,
            conversation: Some(ConversationField::Raw(r#"{"id":"abc"}"#.to_string())),
            message_type: "text".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn wa_id_follows_direction() {
        let incoming =
            StatusEvent::build(&message(Direction::Incoming), &context(), StatusAction::Read)
                .unwrap();
        assert_eq!(incoming.wa_id, "999");

        let outgoing =
            StatusEvent::build(&message(Direction::Outgoing), &context(), StatusAction::Read)
                .unwrap();
        assert_eq!(outgoing.wa_id, "12 345");
    }

    #[test]
    fn target_phone_has_no_whitespace() {
        let mut source = message(Direction::Incoming);
        source.to = Some("+1 234\t567".to_string());
        let event = StatusEvent::build(&source, &context(), StatusAction::Sent).unwrap();
        assert_eq!(event.target_phone, "+1234567");
    }

    #[test]
    fn missing_to_becomes_empty_target_phone() {
        let mut source = message(Direction::Incoming);
        source.to = None;
        let event = StatusEvent::build(&source, &context(), StatusAction::Sent).unwrap();
        assert_eq!(event.target_phone, "");
    }

    #[test]
    fn structured_conversation_passes_through_unchanged() {
        let record = Conversation {
            id: "conv-1".to_string(),
            origin: Some(ConversationOrigin {
                origin_type: "service".to_string(),
            }),
            expiration_timestamp: Some("1700000000".to_string()),
            extra: Map::new(),
        };
        let mut source = message(Direction::Incoming);
        source.conversation = Some(ConversationField::Record(record.clone()));

        let event = StatusEvent::build(&source, &context(), StatusAction::Delivered).unwrap();
        assert_eq!(event.conversation, Some(record));
    }

    #[test]
    fn stringified_conversation_deep_equals_the_record() {
        let record = Conversation {
            id: "conv-1".to_string(),
            origin: Some(ConversationOrigin {
                origin_type: "user_initiated".to_string(),
            }),
            expiration_timestamp: None,
            extra: Map::new(),
        };
        let mut source = message(Direction::Incoming);
        source.conversation = Some(ConversationField::Raw(
            serde_json::to_string(&record).unwrap(),
        ));

        let event = StatusEvent::build(&source, &context(), StatusAction::Delivered).unwrap();
        assert_eq!(event.conversation, Some(record));
    }

    #[test]
    fn malformed_conversation_fails_the_build() {
        let mut source = message(Direction::Incoming);
        source.conversation = Some(ConversationField::Raw("{not valid json".to_string()));

        let result = StatusEvent::build(&source, &context(), StatusAction::Read);
        assert!(result.is_err());
    }

    #[test]
    fn failed_action_carries_the_supplied_code() {
        let event = StatusEvent::build(
            &message(Direction::Incoming),
            &context(),
            StatusAction::Failed {
                error_code: "131047".to_string(),
            },
        )
        .unwrap();
        assert_eq!(event.status, StatusKind::Failed);
        assert_eq!(event.error_code.as_deref(), Some("131047"));
    }

    #[test]
    fn unknown_failure_codes_are_accepted_as_is() {
        let event = StatusEvent::build(
            &message(Direction::Incoming),
            &context(),
            StatusAction::Failed {
                error_code: "999999".to_string(),
            },
        )
        .unwrap();
        assert_eq!(event.error_code.as_deref(), Some("999999"));
    }

    #[test]
    fn read_event_serializes_without_error_code() {
        let event =
            StatusEvent::build(&message(Direction::Incoming), &context(), StatusAction::Read)
                .unwrap();
        assert_eq!(event.error_code, None);

        let wire = serde_json::to_value(&event).unwrap();
        assert_eq!(wire["type"], "read");
        assert!(wire.get("error_code").is_none());
    }

    #[test]
    fn delivered_scenario_matches_the_wire_contract() {
        let event = StatusEvent::build(
            &message(Direction::Incoming),
            &context(),
            StatusAction::Delivered,
        )
        .unwrap();

        let wire = serde_json::to_value(&event).unwrap();
        assert_eq!(wire["type"], "delivered");
        assert_eq!(wire["messageId"], "7");
        assert_eq!(wire["wa_id"], "999");
        assert_eq!(wire["to"], "12345");
        assert_eq!(wire["conversation"]["id"], "abc");
        assert_eq!(wire["phone_number_id"], "106540352242922");
        assert_eq!(wire["business_account_id"], "102290129340398");
    }
}
