// crates/bm-core/src/config.rs - Storage location configuration
//
// Where the storage file lives is decided by two environment variables, each
// falling back to a default when unset:
//
//   BM_STORAGE_HOME       directory holding the file   (~/.local/share/bm)
//   BM_STORAGE_FILE_NAME  name of the file             (books.json)
//
// A missing variable is never an error. The leading "~" of the default home
// is expanded to the user's home directory when one can be found.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::storage::Storage;

/// Environment variable selecting the storage directory
pub const VAR_STORAGE_HOME: &str = "BM_STORAGE_HOME";

/// Environment variable selecting the storage file name
pub const VAR_STORAGE_FILE_NAME: &str = "BM_STORAGE_FILE_NAME";

/// Storage directory used when `BM_STORAGE_HOME` is unset
pub const DEFAULT_STORAGE_HOME: &str = "~/.local/share/bm";

/// Storage file name used when `BM_STORAGE_FILE_NAME` is unset
pub const DEFAULT_STORAGE_FILE_NAME: &str = "books.json";

/// Resolved storage location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub home: PathBuf,
    pub file_name: OsString,
}

impl StorageConfig {
    /// Resolve the storage location from the process environment
    ///
    /// Values are taken as-is, so paths that are not valid UTF-8 still count
    /// as set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Resolve the storage location from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let home = lookup(VAR_STORAGE_HOME)
            .map(PathBuf::from)
            .unwrap_or_else(default_home);

        let file_name =
            lookup(VAR_STORAGE_FILE_NAME).unwrap_or_else(|| DEFAULT_STORAGE_FILE_NAME.into());

        Self { home, file_name }
    }

    /// Storage handle for this location
    pub fn storage(&self) -> Storage {
        Storage::new(self.home.clone(), self.file_name.clone())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn default_home() -> PathBuf {
    expand_home(DEFAULT_STORAGE_HOME, dirs::home_dir())
}

/// Replace a leading "~" with `user_home`, if there is one
fn expand_home(path: &str, user_home: Option<PathBuf>) -> PathBuf {
    match (path.strip_prefix('~'), user_home) {
        (Some(rest), Some(user_home)) => {
            user_home.join(rest.trim_start_matches(['/', '\\']))
        }
        _ => PathBuf::from(path),
    }
}
