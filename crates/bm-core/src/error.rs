// crates/bm-core/src/error.rs - Error kinds shared by every layer
//
// Each concern owns its own error enum (StorageError, ArgsError). This module
// joins them into the single type that command handlers and the dispatcher
// return, so an error raised deep in the store reaches `main` unchanged.

use thiserror::Error;

use crate::args::ArgsError;
use crate::storage::StorageError;

/// Any failure a bm command can report
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Args(#[from] ArgsError),

    #[error("book {0} does not exist")]
    NotFound(String),
}

/// Result type for bm operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_errors_keep_their_message() {
        let err: Error = ArgsError::UnknownCommand("frobnicate".to_string()).into();
        assert_eq!(err.to_string(), "unknown command `frobnicate`");

        let err = Error::NotFound("dune123456".to_string());
        assert_eq!(err.to_string(), "book dune123456 does not exist");
    }
}
