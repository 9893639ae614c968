//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{BookingBuddyError, Result};

use super::Settings;

/// Recognizer locales this build ships implementations for
pub const SUPPORTED_LOCALES: [&str; 1] = ["en-us"];

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_redis_config(&settings.redis)?;
    validate_recognition_config(&settings.recognition)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(BookingBuddyError::Config(
            "Bot token is required".to_string(),
        ));
    }
    Ok(())
}

fn validate_redis_config(config: &super::RedisConfig) -> Result<()> {
    if !config.url.starts_with("redis://") && !config.url.starts_with("rediss://") {
        return Err(BookingBuddyError::Config(format!(
            "Invalid Redis URL: {}",
            config.url
        )));
    }
    if config.ttl_seconds == 0 {
        return Err(BookingBuddyError::Config(
            "Redis TTL must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn validate_recognition_config(config: &super::RecognitionConfig) -> Result<()> {
    if !SUPPORTED_LOCALES.contains(&config.locale.as_str()) {
        return Err(BookingBuddyError::Config(format!(
            "Unsupported recognition locale: {} (supported: {})",
            config.locale,
            SUPPORTED_LOCALES.join(", ")
        )));
    }
    Ok(())
}

fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if !LOG_LEVELS.contains(&config.level.as_str()) {
        return Err(BookingBuddyError::Config(format!(
            "Invalid log level: {}",
            config.level
        )));
    }
    if config.file_path.is_empty() {
        return Err(BookingBuddyError::Config(
            "Log file path is required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.bot.token = "12345:token".to_string();
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_missing_token_rejected() {
        let mut settings = valid_settings();
        settings.bot.token = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_bad_redis_url_rejected() {
        let mut settings = valid_settings();
        settings.redis.url = "postgres://localhost".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_unsupported_locale_rejected() {
        let mut settings = valid_settings();
        settings.recognition.locale = "fr-fr".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let mut settings = valid_settings();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
