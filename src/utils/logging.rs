use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_appender::non_blocking::WorkerGuard;
use crate::errors::{DoorControllerError, DoorControllerResult};

/// Initializes the logging system for the application
///
/// This function sets up the logging subscriber and layers based on the provided configuration
/// It supports logging to both the console and a log file (if a file path is provided)
/// The log file is named `automatic-door_{current_date}.log` and is located in the specified directory
/// The logging level is determined from the environment variable `RUST_LOG` or defaults to `default_level`
///
/// # Arguments
///
/// * `log_file_path`: An optional `PathBuf` specifying the directory where the log file should be created
/// * `default_level`: The filter directive used when `RUST_LOG` is not set (e.g. "info")
///
/// # Returns
///
/// * `Ok(Some(WorkerGuard))`: If logging is initialized successfully with a file appender, the `WorkerGuard` is returned
/// * `Ok(None)`: If logging is initialized successfully without a file appender (console only)
/// * `Err(DoorControllerError)`: If there's an error initializing the logging system
pub fn init_logger(log_file_path: Option<PathBuf>, default_level: &str) -> DoorControllerResult<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| DoorControllerError::LoggingError(e.to_string()))?;

    let format = fmt::format()
        .with_timer(fmt::time::LocalTime::rfc_3339())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if let Some(path) = log_file_path {
        std::fs::create_dir_all(&path)?;

        let file_name = format!(
            "automatic-door_{}.log",
            chrono::Local::now().format("%Y-%m-%d")
        );
        let file_appender = RollingFileAppender::new(Rotation::NEVER, &path, file_name);

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = fmt::Layer::default()
            .event_format(format.clone())
            .with_writer(non_blocking);

        let console_layer = fmt::Layer::default()
            .event_format(format.with_ansi(true))
            .with_writer(std::io::stdout);

        tracing::subscriber::set_global_default(subscriber.with(file_layer).with(console_layer))
            .map_err(|e| DoorControllerError::LoggingError(e.to_string()))?;

        tracing::info!("Logging initialized successfully, writing to {}", path.display());
        Ok(Some(guard))
    } else {
        let console_layer = fmt::Layer::default()
            .event_format(format.with_ansi(true))
            .with_writer(std::io::stdout);

        tracing::subscriber::set_global_default(subscriber.with(console_layer))
            .map_err(|e| DoorControllerError::LoggingError(e.to_string()))?;

        tracing::info!("Logging initialized successfully (console only)");
        Ok(None)
    }
}
