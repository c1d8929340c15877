//! Tracing subscriber setup.
//!
//! Console output always goes to stderr. With a log file, a second
//! non-blocking layer writes the same events without ANSI colors.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter for a `-v` count.
///
/// Without `-v`, `RUST_LOG` wins and `default_level` applies otherwise.
pub fn env_filter(verbose: u8, default_level: &str) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must outlive
/// every log call.
pub fn init(
    verbose: u8,
    default_level: &str,
    log_file: Option<&Path>,
) -> std::io::Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            std::fs::create_dir_all(dir)?;
            let file_name = path.file_name().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("log file path has no file name: {}", path.display()),
                )
            })?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter(verbose, default_level))
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_levels() {
        assert_eq!(env_filter(1, "warn").to_string(), "info");
        assert_eq!(env_filter(2, "warn").to_string(), "debug");
        assert_eq!(env_filter(5, "warn").to_string(), "trace");
    }
}
