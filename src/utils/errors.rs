//! Error handling for BookingBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for BookingBuddy application
#[derive(Error, Debug)]
pub enum BookingBuddyError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for BookingBuddy operations
pub type Result<T> = std::result::Result<T, BookingBuddyError>;

impl BookingBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            BookingBuddyError::Telegram(_) => true,
            BookingBuddyError::Redis(_) => true,
            BookingBuddyError::Serialization(_) => false,
            BookingBuddyError::Io(_) => true,
            BookingBuddyError::Config(_) => false,
            // Bad input is re-prompted, never fatal
            BookingBuddyError::InvalidInput(_) => true,
        }
    }
}
