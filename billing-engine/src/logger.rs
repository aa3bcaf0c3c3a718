//! Logging Infrastructure
//!
//! Structured logging setup for both development and production runs.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with defaults (`RUST_LOG` honored)
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with an explicit level filter and optional
/// file output.
///
/// `log_level` accepts anything `EnvFilter` understands ("info",
/// "billing_engine=debug", ...); `RUST_LOG` takes over when it is
/// unset. When `log_dir` points at an existing directory, output goes
/// to a daily-rolling file there instead of stderr.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if let Some(dir) = log_dir
        && Path::new(dir).exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "billing-engine");
        subscriber.with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}
