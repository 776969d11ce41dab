//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional daily-rolling file output
///
/// The log directory is created if missing; only an uncreatable directory
/// falls back to stdout.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir.and_then(prepare_log_dir) {
        let file_appender = tracing_appender::rolling::daily(dir, "toolworks-server");
        subscriber.with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}

/// Ensure the log directory exists, returning it when usable
fn prepare_log_dir(dir: &str) -> Option<String> {
    match std::fs::create_dir_all(dir) {
        Ok(()) => Some(dir.to_string()),
        Err(e) => {
            eprintln!("Failed to create log directory '{dir}': {e}; logging to stdout");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_log_dir_creates_missing_directory() {
        let base = tempfile::tempdir().unwrap();
        let nested = base.path().join("logs").join("daily");
        let nested_str = nested.to_str().unwrap();

        assert!(!nested.exists());
        assert_eq!(prepare_log_dir(nested_str), Some(nested_str.to_string()));
        assert!(nested.is_dir());

        // 已存在的目录可以直接复用
        assert_eq!(prepare_log_dir(nested_str), Some(nested_str.to_string()));
    }
}
