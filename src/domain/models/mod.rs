pub mod message;
pub mod status;

pub use message::{Conversation, ConversationField, ConversationOrigin, Direction, Message};
pub use status::{KNOWN_FAILURE_CODES, StatusAction, StatusKind, failure_code_label};
