mod atomic;
mod hash;

pub use atomic::atomic_write;
pub use hash::compute_hash;

use std::path::PathBuf;

/// Name of the per-user folder holding config and logs.
pub const APP_FOLDER: &str = ".content-store";

/// Get the per-user folder (`~/.content-store`).
///
/// Falls back to the current directory when no home directory is known.
#[must_use]
pub fn app_home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_FOLDER)
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
