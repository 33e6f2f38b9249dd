pub mod jwt;
pub mod message_store;
pub mod webhook;
