//! Logging Infrastructure
//!
//! Structured logging setup for development (console) and long-running
//! hosts (console + daily rotating file).

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging at `level`
///
/// `RUST_LOG` takes precedence when set. Calling this more than once is a
/// no-op, so tests can call it freely.
pub fn init_logger(level: &str) {
    let _ = init_logger_with_file(level, false, None);
}

/// Initialize the logging system with an optional daily rotating file
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - Whether the console layer emits JSON
/// * `log_dir` - Optional directory for file logging (e.g., Some("./logs"))
///
/// # Examples
/// ```no_run
/// hris_portal::utils::logger::init_logger_with_file("debug", false, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "hris-portal");
            Some(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(appender)
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
