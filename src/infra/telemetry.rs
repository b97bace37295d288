//! Logging setup for the server binary.

use crate::infra::config::{Config, LogFormat};
use anyhow::Context;
use std::fs::OpenOptions;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global `tracing` subscriber and a panic hook that logs panics.
///
/// The filter comes from `RUST_LOG` (default `info`). With `log_file` set, output is
/// appended to that file through a background writer; the returned guard flushes it
/// on drop and must be held until shutdown.
pub fn init_tracing(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_target(true);

    let (result, guard) = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let builder = builder.with_writer(writer).with_ansi(false);
            let result = match config.log_format {
                LogFormat::Json => builder.json().try_init(),
                LogFormat::Text => builder.try_init(),
            };
            (result, Some(guard))
        }
        None => {
            let result = match config.log_format {
                LogFormat::Json => builder.json().try_init(),
                LogFormat::Text => builder.try_init(),
            };
            (result, None)
        }
    };
    result.map_err(|e| anyhow::anyhow!("tracing init failed: {e}"))?;

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(panic = %info, "uncaught panic");
        default_hook(info);
    }));

    Ok(guard)
}
