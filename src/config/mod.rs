//! Configuration management for BookingBuddy

pub mod settings;
pub mod validation;

pub use settings::{BotConfig, LoggingConfig, RecognitionConfig, RedisConfig, Settings};
