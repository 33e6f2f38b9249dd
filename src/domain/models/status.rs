use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Sent,
    Delivered,
    Read,
    Failed,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Sent => "sent",
            StatusKind::Delivered => "delivered",
            StatusKind::Read => "read",
            StatusKind::Failed => "failed",
        }
    }
}

/// A user-triggered status action. Only `Failed` carries an error code, so
/// success events can never pick one up by accident. The code itself is not
/// validated against [`KNOWN_FAILURE_CODES`]; any value is forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusAction {
    Sent,
    Delivered,
    Read,
    Failed { error_code: String },
}

impl StatusAction {
    pub fn kind(&self) -> StatusKind {
        match self {
            StatusAction::Sent => StatusKind::Sent,
            StatusAction::Delivered => StatusKind::Delivered,
            StatusAction::Read => StatusKind::Read,
            StatusAction::Failed { .. } => StatusKind::Failed,
        }
    }

    pub fn error_code(&self) -> Option<&str> {
        match self {
            StatusAction::Failed { error_code } => Some(error_code),
            _ => None,
        }
    }
}

/// Failure codes the console offers as one-click affordances. Labels only;
/// unknown codes are still accepted by the builder.
pub const KNOWN_FAILURE_CODES: [(&str, &str); 4] = [
    ("131047", "Re-engagement message"),
    ("130472", "User experiment (1:1 message)"),
    ("131026", "Undeliverable"),
    ("131049", "Ecosystem engagement"),
];

pub fn failure_code_label(code: &str) -> Option<&'static str> {
    KNOWN_FAILURE_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
}
