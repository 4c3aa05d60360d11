// crates/bm-cli/src/main.rs - CLI Application Entry Point
//
// bm - simple bookmarking tool (literally for books).
//
// ```bash
// bm new "The Hobbit"        # (+) Created a new book "The Hobbit", id: thehobb042.
// bm set thehobb042 118      # (*) "The Hobbit" (thehobb042): page 118.
// bm show thehobb042         # "The Hobbit" (thehobb042): page 118.
// bm ls                      # - "The Hobbit" (thehobb042): page 118.
// bm rm thehobb042           # (-) Deleted book "The Hobbit" (thehobb042).
// ```
//
// Books are stored in $BM_STORAGE_HOME/$BM_STORAGE_FILE_NAME
// (default ~/.local/share/bm/books.json). Diagnostics go to stderr and are
// controlled with BM_LOG (e.g. BM_LOG=debug).

use anyhow::{Result, anyhow};
use bm_core::{Dispatcher, ProgramMeta};
use std::env;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands; // Command implementations
mod context; // Application context handed to every command
mod services; // Terminal output

use context::Context;
use services::ConsoleOutput;

/// Name errors are prefixed with
const PROGRAM_NAME: &str = "bm";

/// Environment variable holding the diagnostics filter
const LOG_ENV: &str = "BM_LOG";

/// Filter used when BM_LOG is unset or unparsable
const DEFAULT_LOG_FILTER: &str = "warn";

/// Program information shown in help
pub(crate) fn program_meta() -> ProgramMeta {
    ProgramMeta {
        name: PROGRAM_NAME,
        description: "bm - simple bookmarking tool (literally for books)",
        version: env!("CARGO_PKG_VERSION"),
        author: env!("CARGO_PKG_AUTHORS"),
    }
}

/// Main entry point - set up logging, build the command table, dispatch
///
/// Every error is reported here and only here, as "bm: <error>" on stderr,
/// followed by exit status 1.
fn main() -> ExitCode {
    // Logging problems are diagnostics, never command errors
    if let Err(err) = init_tracing() {
        eprintln!("warning: {err:#}");
    }

    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let ctx = Context::from_env();
    let dispatcher = Dispatcher::new(program_meta(), commands::registry());
    let mut out = ConsoleOutput::stdout();

    match dispatcher.dispatch(&args, &ctx, &mut out) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr log subscriber, filtered by BM_LOG (default: warn)
///
/// An unparsable BM_LOG falls back to the default filter and is reported as
/// a warning once the subscriber is up.
fn init_tracing() -> Result<()> {
    let (filter, rejected) = match env::var(LOG_ENV) {
        Ok(directives) => match EnvFilter::try_new(&directives) {
            Ok(filter) => (filter, None),
            Err(err) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some((directives, err))),
        },
        Err(_) => (EnvFilter::new(DEFAULT_LOG_FILTER), None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

    if let Some((directives, err)) = rejected {
        tracing::warn!("ignoring invalid {LOG_ENV} value `{directives}`: {err}");
    }
    Ok(())
}
