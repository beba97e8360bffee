//! Common CLI utility functions shared across commands.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use trap_core::config::storage::STORE_NAME;
use trap_core::{FileStore, Trapmaster};

/// `<data_dir>/trapmaster/trap_coach_prefs.json`, or the working directory
/// when the platform has no data directory.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trapmaster")
        .join(format!("{}.json", STORE_NAME))
}

/// Open the app over the given store file or the default one.
pub fn open_app(store: Option<&Path>) -> Result<Trapmaster<FileStore>> {
    let path = store.map(Path::to_path_buf).unwrap_or_else(default_store_path);
    let file_store = FileStore::open(&path)
        .with_context(|| format!("Failed to open store {}", path.display()))?;
    debug!("Using store {}", file_store.path().display());
    Ok(Trapmaster::new(file_store))
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
pub fn confirm(question: &str) -> bool {
    print!("{} [y/N] ", question);
    io::stdout().flush().ok();
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}
