//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() -> anyhow::Result<()> {
    init_logger_with_file(None, None)
}

/// Directives used when `RUST_LOG` is unset
///
/// `security` is the target of [`security_log!`](crate::security_log).
fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!(
        "employee_server={level},tower_http={level},security={level}"
    ))
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> anyhow::Result<()> {
    let level = log_level.unwrap_or("info");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        std::fs::create_dir_all(log_path)?;
        let file_appender = tracing_appender::rolling::daily(log_path, "employee-server");
        subscriber
            .with_ansi(false)
            .with_writer(file_appender)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;
        return Ok(());
    }

    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    fn enabled_with(level: &str, check: impl FnOnce() -> bool) -> bool {
        let subscriber = tracing_subscriber::registry().with(default_filter(level));
        tracing::subscriber::with_default(subscriber, check)
    }

    #[test]
    fn test_default_filter_keeps_security_events() {
        assert!(enabled_with("info", || tracing::enabled!(target: "security", Level::INFO)));
        assert!(enabled_with("info", || {
            tracing::enabled!(target: "employee_server::api", Level::INFO)
        }));
        assert!(!enabled_with("info", || tracing::enabled!(target: "sqlx::query", Level::INFO)));
    }

    #[test]
    fn test_default_filter_respects_level() {
        assert!(!enabled_with("warn", || tracing::enabled!(target: "security", Level::INFO)));
        assert!(enabled_with("warn", || tracing::enabled!(target: "security", Level::WARN)));
    }
}
