//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the BookingBuddy application.

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// The returned guard owns the background writer for the rolling file
/// layer; the caller must keep it alive for the process lifetime or
/// file output stops.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "bookingbuddy.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a completed conversation turn with structured data
pub fn log_turn(user_id: i64, chat_id: i64, question: &str, reply_count: usize) {
    info!(
        user_id = user_id,
        chat_id = chat_id,
        question = question,
        reply_count = reply_count,
        "Conversation turn completed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_layer_writes_while_guard_is_held() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "debug".to_string(),
            file_path: dir.path().to_string_lossy().into_owned(),
        };

        let guard = init_logging(&config).unwrap();
        info!("startup smoke event");
        // Dropping the guard flushes the background writer
        drop(guard);

        let written: u64 = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().metadata().unwrap().len())
            .sum();
        assert!(written > 0, "rolling log file should contain the event");
    }
}
