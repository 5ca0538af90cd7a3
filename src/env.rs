//! Environment detection for dataset access
//!
//! The tutorial datasets are pre-populated on a restricted EOS mount. Whether
//! that mount is readable is probed exactly once, when the [`Environment`] is
//! constructed, and the result is kept for the lifetime of the value. An
//! unreadable mount is not an error; it just means downloads go through
//! CERNBox instead.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// EOS directory holding the tutorial datasets
pub const EOS_DIR: &str = "/eos/user/m/mrieger/public/iml2019";

/// Local data directory used as download fallback
pub const DATA_DIR: &str = "data";

/// Resolved dataset environment
///
/// Holds the privileged mount root, the local cache root, and the
/// once-computed mount availability.
#[derive(Debug, Clone)]
pub struct Environment {
    eos_dir: PathBuf,
    data_dir: PathBuf,
    eos_available: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self::detect()
    }
}

impl Environment {
    /// Detect the environment using the fixed tutorial locations
    pub fn detect() -> Self {
        Self::with_roots(EOS_DIR, DATA_DIR)
    }

    /// Build an environment with custom roots (for tests or alternate mounts)
    pub fn with_roots<P: AsRef<Path>, Q: AsRef<Path>>(eos_dir: P, data_dir: Q) -> Self {
        let eos_dir = eos_dir.as_ref().to_path_buf();
        let data_dir = data_dir.as_ref().to_path_buf();

        // Readability probe; any failure means "not available", never an error.
        let eos_available = fs::read_dir(&eos_dir).is_ok();
        info!(
            "EOS access: {}",
            if eos_available { "available" } else { "unavailable" }
        );

        Self {
            eos_dir,
            data_dir,
            eos_available,
        }
    }

    /// Whether the EOS mount was readable at construction time
    pub fn eos_available(&self) -> bool {
        self.eos_available
    }

    /// Root of the EOS mount
    pub fn eos_dir(&self) -> &Path {
        &self.eos_dir
    }

    /// Root of the local data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
