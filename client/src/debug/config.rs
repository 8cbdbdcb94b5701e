//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "swap_client=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Rolling file name prefix
    pub log_file_name: String,
    /// Log level filter (e.g., "swap_client=debug,info")
    pub log_level: String,
    /// Mirror logs to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_name: "swap-client.log".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_to_stderr: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: std::env::var("SWAP_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_file_name: defaults.log_file_name,
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_to_stderr: std::env::var("SWAP_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    /// Current log file path (today's rotation carries a date suffix)
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }
}
