pub mod repositories;
pub mod webhook;
