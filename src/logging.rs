use crate::{CONFIG_DIRECTORY, LOG_FILE, config::Config};
use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};
use tracing_subscriber::EnvFilter;

/// Send `tracing` output to a log file, leaving the terminal to the UI.
///
/// `RUST_LOG` wins over the configured level. Returns the log path, or
/// `None` if logging could not be set up.
pub fn init(config: &Config) -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join(CONFIG_DIRECTORY);
    std::fs::create_dir_all(&dir).ok()?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}

fn filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
