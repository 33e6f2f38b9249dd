use poem_openapi::Enum;

use crate::domain::models::{Direction, StatusKind};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DirectionKind {
    #[oai(rename = "incoming")]
    Incoming,
    #[oai(rename = "outgoing")]
    Outgoing,
}

impl From<Direction> for DirectionKind {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Incoming => DirectionKind::Incoming,
            Direction::Outgoing => DirectionKind::Outgoing,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum StatusKindDto {
    #[oai(rename = "sent")]
    Sent,
    #[oai(rename = "delivered")]
    Delivered,
    #[oai(rename = "read")]
    Read,
    #[oai(rename = "failed")]
    Failed,
}

impl From<StatusKind> for StatusKindDto {
    fn from(value: StatusKind) -> Self {
        match value {
            StatusKind::Sent => StatusKindDto::Sent,
            StatusKind::Delivered => StatusKindDto::Delivered,
            StatusKind::Read => StatusKindDto::Read,
            StatusKind::Failed => StatusKindDto::Failed,
        }
    }
}
