//! Optional debug logging to disk.
//!
//! The TUI owns stdout, so tracing output goes to a file under the
//! configured log directory instead. Disabled unless the config enables it
//! or `CRABCALC_LOG` is set in the environment.

use crate::config::LoggingConfig;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

pub fn init(config: &LoggingConfig) {
    let env_enabled = std::env::var_os("CRABCALC_LOG").is_some();
    if !config.enabled && !env_enabled {
        return;
    }

    let dir = expand_home(&config.log_dir);
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("crabcalc.log"))
    else {
        return;
    };

    let level = if env_enabled { Level::TRACE } else { Level::DEBUG };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .try_init();
}

fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(dir)
}
