pub mod commands;
pub mod relay_error;
