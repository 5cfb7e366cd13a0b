//! Logging configuration and setup
//!
//! Initializes the tracing subscriber for the consuming application. The
//! crate itself only emits events; whether and where they go is decided
//! here, once, by the process entry point.

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// When a log file is configured the returned guard must be held for the
/// lifetime of the process, or buffered events are lost.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::new(&config.level);

    match &config.file_path {
        Some(path) => {
            let file_appender = tracing_appender::rolling::daily(path, "routelingo.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
                .init();

            info!("Logging initialized with level: {}", config.level);
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                .init();

            info!("Logging initialized with level: {}", config.level);
            Ok(None)
        }
    }
}
