pub mod delete_messages;
pub mod list_messages;
pub mod push_status;
