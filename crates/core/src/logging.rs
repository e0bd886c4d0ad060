use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".collbridge")
        .join("logs")
}

/// Installs the global subscriber: a daily rolling `<component>.log.<date>`
/// file under `~/.collbridge/logs`, mirrored to stderr when `to_stderr` is set.
///
/// `RUST_LOG` takes precedence over `default_filter`. Records are flushed for
/// as long as the returned guard is alive. A subscriber installed earlier wins.
pub fn init_logging(component: &str, default_filter: &str, to_stderr: bool) -> WorkerGuard {
    let dir = log_dir();
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("collbridge: cannot create {}: {err}", dir.display());
    }

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, component));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(stderr)
        .try_init();

    guard
}
