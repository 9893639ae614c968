//! BookingBuddy Telegram Bot
//!
//! A Telegram bot that fills out a travel booking profile (name, age,
//! travel date) through a guided conversation. Each answer is validated
//! with natural-language recognizers before the next question is asked,
//! and conversation state is persisted in Redis between turns.

#![allow(non_snake_case)]

pub mod config;
pub mod dialog;
pub mod handlers;
pub mod recognize;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{BookingBuddyError, Result};

// Re-export main components for easy access
pub use dialog::{run_turn, ConversationFlow, Question, UserProfile};
pub use recognize::RecognizerSet;
pub use state::StateStorage;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
