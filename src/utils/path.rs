//! Path utilities: locate the app directory, expand ~, resolve relative entries.

use std::env;
use std::path::{Path, PathBuf};

/// Directory holding config, flag and log files (`~/.itinerary`).
/// `ITINERARY_HOME` overrides it, which keeps tests away from the real home.
pub fn app_dir() -> PathBuf {
    if let Ok(custom) = env::var("ITINERARY_HOME")
        && !custom.trim().is_empty()
    {
        return PathBuf::from(custom);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".itinerary")
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `~` and anchor relative paths to `base`.
pub fn resolve(path: &str, base: &Path) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() { p } else { base.join(p) }
}
