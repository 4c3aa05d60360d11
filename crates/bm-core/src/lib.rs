// crates/bm-core/src/lib.rs - Core library for the bm bookmarking tool
//
// bm keeps track of where you stopped reading in each of your books. This
// crate holds everything that is not terminal glue:
//
// - id: readable-but-random book identifiers derived from titles
// - storage: the JSON file holding every book, loaded and saved whole
// - args: the command registry and the dispatcher that drives it
// - config: where the storage file lives (environment + defaults)
// - output: the sink commands write user-facing lines into
// - error: the error kinds every layer propagates upward
//
// The CLI crate wires these together; nothing here prints directly.

pub mod args;
pub mod config;
pub mod error;
pub mod id;
pub mod output;
pub mod storage;

pub use args::{ArgsError, Command, CommandSpec, Dispatcher, Outcome, ProgramMeta, Resolution};
pub use config::StorageConfig;
pub use error::{Error, Result};
pub use output::{Marker, MemoryOutput, Output};
pub use storage::{Book, Books, Storage, StorageError};
