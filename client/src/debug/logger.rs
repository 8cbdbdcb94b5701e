//! File-based logging initialization

use super::config::{DebugConfig, DEFAULT_LOG_LEVEL};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Keeps the non-blocking writer flushing; drop it on shutdown.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Initialize the logging system from the environment.
///
/// Sets up:
/// - Daily log rotation in `SWAP_LOG_DIR`
/// - Non-blocking file writes
/// - Optional stderr mirror
/// - Panic hook that logs the location and message
///
/// If the log directory cannot be created, logs go to stderr only.
pub fn init() -> LogGuard {
    init_with(&DebugConfig::from_env())
}

/// Initialize the logging system with an explicit configuration.
pub fn init_with(config: &DebugConfig) -> LogGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let (file_layer, guard) = match fs::create_dir_all(&config.log_dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(&config.log_dir, &config.log_file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false); // No ANSI codes in log files
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Warning: Failed to create log directory: {}", e);
            (None, None)
        }
    };

    let stderr_layer = (config.log_to_stderr || guard.is_none()).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: Logging already initialized: {}", e);
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        stderr = config.log_to_stderr,
        "Logging initialized"
    );

    setup_panic_hook();

    LogGuard { _file: guard }
}

/// Log panics with location and message before the default handler runs.
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}
