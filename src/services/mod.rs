pub mod chat_session;
pub mod openrouter;
pub mod relay;
