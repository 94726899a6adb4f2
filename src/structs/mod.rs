pub mod ai;
pub mod chat_message;
pub mod chat_request;
pub mod cli;
pub mod config;
pub mod kost;
pub mod validation_result;
