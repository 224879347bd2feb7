//! Tracing bootstrap for embedders.
//!
//! The library itself only emits `tracing` events; nothing is installed
//! implicitly. Programs that want the scanner's logs call [`init_logging`]
//! once at startup.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a global subscriber writing daily-rolled files named after
/// `component`, plus an optional ANSI stderr layer.
///
/// Files land in `$CLASSHOUND_LOG_DIR`, falling back to
/// `~/.classhound/logs`. The returned guard must stay alive for the file
/// writer to flush.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let log_dir = log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    guard
}

fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CLASSHOUND_LOG_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".classhound/logs")
}
