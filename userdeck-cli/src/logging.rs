// tracing setup. The interactive client logs to a file so the alternate
// screen stays clean; one-shot commands log to stderr.

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use user_service::config::{Config, LogConfig};

/// `RUST_LOG` wins over the configured level
fn filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

pub fn init_stderr(config: &LogConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to initialise logging: {}", e))
}

/// Returns the file being written to
pub fn init_file(config: &LogConfig) -> Result<PathBuf> {
    let path = config.file.clone().unwrap_or_else(Config::default_log_file);
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("failed to initialise logging: {}", e))?;

    Ok(path)
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("userdeck.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
