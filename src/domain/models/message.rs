use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Map;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Incoming => "incoming",
            Direction::Outgoing => "outgoing",
        }
    }

    /// Anything that is not literally "incoming" is treated as outgoing.
    pub fn from_str(value: &str) -> Self {
        match value {
            "incoming" => Direction::Incoming,
            _ => Direction::Outgoing,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationOrigin {
    #[serde(rename = "type")]
    pub origin_type: String,
}

/// Structured conversation record as the WhatsApp Business API shapes it.
/// Unknown fields are kept in `extra` so a parsed record round-trips the
/// stored JSON exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<ConversationOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_timestamp: Option<String>,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, serde_json::Value>,
}

/// Dual representation of the stored conversation: older rows keep the
/// serialized JSON string, newer ones the structured record. Normalized to
/// [`Conversation`] exactly once, when a status event is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ConversationField {
    Record(Conversation),
    Raw(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub phone_number_id: String,
    pub to: Option<String>,
    pub from: Option<String>,
    pub direction: Direction,
    pub conversation: Option<ConversationField>,
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}
