//! Logging setup. The terminal belongs to the UI, so logs go to a daily
//! rolling file in the user cache directory.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::settings::user_cache_dir;

const LOG_FILE_PREFIX: &str = "image-studio.log";

/// Install the global subscriber writing under `<cache dir>/logs`.
///
/// Returns the guard that flushes the file writer on drop, or `None` when
/// no log directory is available or a subscriber is already installed.
pub fn init_logging(level: &str) -> Option<WorkerGuard> {
    let dir = user_cache_dir()?.join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    init_logging_in(&dir, level)
}

pub fn init_logging_in(dir: &Path, level: &str) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().with_writer(writer).with_ansi(false).with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .ok()?;
    Some(guard)
}
