// crates/bm-core/src/storage.rs - Book storage file
//
// All books live in one JSON file mapping book ID to record:
//
// {
//  "dune482913": {
//   "title": "Dune",
//   "page_number": 42
//  }
// }
//
// Every command reads the whole file, changes the in-memory map, and writes
// the whole file back. There is no locking and no temp-file swap: two
// processes saving at once lose one update, and a crash mid-write can leave
// a truncated file.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Permissions of the storage home directory (owner only)
pub const HOME_MODE: u32 = 0o700;

/// Permissions of the storage file (owner read/write)
pub const FILE_MODE: u32 = 0o600;

/// Errors that can occur while reading or writing the storage file
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a valid book storage file: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A single tracked book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub page_number: i64,
}

impl Book {
    /// A freshly added book, opened at page 1
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            page_number: 1,
        }
    }
}

/// Every tracked book, keyed by book ID
///
/// Ordered so the file and `ls` come out the same on every run.
pub type Books = BTreeMap<String, Book>;

/// The storage file and the directory holding it
#[derive(Debug, Clone)]
pub struct Storage {
    home: PathBuf,
    file_name: OsString,
    path: PathBuf,
}

impl Storage {
    /// Describe a storage file; nothing is touched until `load`
    pub fn new<P: Into<PathBuf>, S: Into<OsString>>(home: P, file_name: S) -> Self {
        let home = home.into();
        let file_name = file_name.into();
        let path = home.join(&file_name);

        Self {
            home,
            file_name,
            path,
        }
    }

    /// Directory the storage file lives in
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Name of the storage file inside `home`
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// Full path of the storage file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every book from the storage file
    ///
    /// Creates the home directory and an empty storage file first if either
    /// is missing.
    pub fn load(&self) -> StorageResult<Books> {
        if !exists(&self.home)? {
            debug!(home = %self.home.display(), "creating storage home");
            create_home(&self.home).map_err(|source| StorageError::Io {
                path: self.home.clone(),
                source,
            })?;
        }

        if !exists(&self.path)? {
            debug!(path = %self.path.display(), "creating empty storage file");
            self.save(&Books::new())?;
        }

        let content = fs::read(&self.path).map_err(|source| self.io_error(source))?;
        let books: Books =
            serde_json::from_slice(&content).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = books.len(), "loaded books");
        Ok(books)
    }

    /// Overwrite the storage file with `books`
    pub fn save(&self, books: &Books) -> StorageResult<()> {
        let content = encode(books).map_err(|source| self.io_error(source))?;

        let mut file = open_for_write(&self.path).map_err(|source| self.io_error(source))?;
        file.write_all(&content)
            .map_err(|source| self.io_error(source))?;

        debug!(path = %self.path.display(), count = books.len(), "saved books");
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Serialize with a one-space indent
fn encode(books: &Books) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    books.serialize(&mut ser)?;
    Ok(buf)
}

/// Check whether a path exists, keeping errors other than "not found"
fn exists(path: &Path) -> StorageResult<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(unix)]
fn create_home(home: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(HOME_MODE)
        .create(home)
}

#[cfg(not(unix))]
fn create_home(home: &Path) -> io::Result<()> {
    fs::create_dir_all(home)
}

#[cfg(unix)]
fn open_for_write(path: &Path) -> io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(FILE_MODE)
        .open(path)
}

#[cfg(not(unix))]
fn open_for_write(path: &Path) -> io::Result<fs::File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
