// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt::time::uptime};

use crate::config::consts::LOG_FILE;

/// Route `tracing` output to `<store_dir>/debug.log`, stamped with time since start.
///
/// `RUST_LOG` overrides the default `info` filter. Returns `false` when the log
/// file cannot be opened or a subscriber is already installed; the run goes on
/// without a debug log in that case.
pub fn init(store_dir: &Path) -> bool {
    if fs::create_dir_all(store_dir).is_err() {
        return false;
    }
    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(store_dir.join(LOG_FILE))
    {
        Ok(f) => f,
        Err(_) => return false,
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(uptime())
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok()
}
