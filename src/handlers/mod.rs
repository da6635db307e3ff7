//! Terminal client handlers module
//!
//! This module contains the handlers behind the terminal client:
//! - Command handlers for the slash commands typed at the prompt
//! - Text views rendered for every page and dashboard

pub mod commands;
pub mod views;

// Re-export commonly used handler functions
pub use commands::{handle_command, handle_line, Command, Reply};
