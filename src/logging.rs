//! Tracing setup.
//!
//! The terminal belongs to the TUI, so log output goes to a file only.
//! Verbosity comes from `EAVTUI_LOG` (EnvFilter syntax), default `info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "EAVTUI_LOG";
const DEFAULT_FILTER: &str = "info";

/// Build the filter from `EAVTUI_LOG`, falling back to `info` when unset
/// or unparsable.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `path`, creating its parent
/// directory. Fails if the file cannot be opened or a subscriber is already
/// installed.
pub fn init(path: &Path) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(std::io::Error::other)
}
