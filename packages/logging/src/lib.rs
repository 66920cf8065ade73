#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use free_log_client::FreeLogLayer;
pub use log;
use thiserror::Error;

pub use free_log_client;

#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Logs(#[from] free_log_client::LogsInitError),
    #[error(transparent)]
    BuildLogsConfig(#[from] free_log_client::BuildLogsConfigError),
    #[error(transparent)]
    BuildFileWriterConfig(#[from] free_log_client::BuildFileWriterConfigError),
}

/// Initializes the global logger.
///
/// The env filter comes from `SOUNDKIT_LOG`, falling back to `RUST_LOG`.
/// When `filename` is given and `SOUNDKIT_LOG_DIR` is set, logs are also
/// written to that directory.
///
/// # Errors
///
/// * If the logs config fails to build
/// * If the file writer config fails to build
/// * If the global logger fails to initialize
pub fn init(filename: Option<&str>) -> Result<FreeLogLayer, InitError> {
    #[cfg(debug_assertions)]
    const DEFAULT_LOG_LEVEL: &str = "soundkit=trace";
    #[cfg(not(debug_assertions))]
    const DEFAULT_LOG_LEVEL: &str = "soundkit=info";

    let mut logs_config = free_log_client::LogsConfig::builder();

    if let Some(filename) = filename {
        if let Ok(log_dir) = std::env::var("SOUNDKIT_LOG_DIR") {
            logs_config = logs_config.with_file_writer(
                free_log_client::FileWriterConfig::builder()
                    .file_path(std::path::Path::new(&log_dir).join(filename))
                    .log_level(free_log_client::Level::Debug),
            )?;
        } else {
            log::warn!("No SOUNDKIT_LOG_DIR set to put the logs into");
        }
    }

    let env_filter = std::env::var("SOUNDKIT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

    let layer = free_log_client::init(logs_config.env_filter(env_filter))?;

    Ok(layer)
}
