//! Logging Infrastructure
//!
//! `tracing-subscriber` with an `EnvFilter`. `RUST_LOG` wins when set;
//! otherwise the configured level applies to this crate and `tower_http`.
//! With a log directory, output goes to a daily-rolled file instead of stdout.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub fn build_env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(log_level)))
}

fn default_directives(log_level: &str) -> String {
    format!("mopas_server={log_level},tower_http={log_level},security={log_level}")
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = build_env_filter(log_level.unwrap_or("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        match std::fs::create_dir_all(log_path) {
            Ok(()) => {
                let file_appender = tracing_appender::rolling::daily(log_path, "mopas-server");
                let result = subscriber.with_ansi(false).with_writer(file_appender).try_init();
                if let Err(e) = result {
                    eprintln!("Logger already initialized: {e}");
                }
                return;
            }
            Err(e) => eprintln!("Cannot create log directory {dir}: {e}; logging to stdout"),
        }
    }

    if let Err(e) = subscriber.try_init() {
        eprintln!("Logger already initialized: {e}");
    }
}
