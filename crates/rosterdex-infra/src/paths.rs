//! Data directory resolution.

use std::path::PathBuf;

/// Resolve the rosterdex data directory.
///
/// Priority: `ROSTERDEX_DATA_DIR` env var, then `~/.rosterdex`, then the
/// current directory as a last resort.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ROSTERDEX_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".rosterdex");
    }

    PathBuf::from(".rosterdex")
}
