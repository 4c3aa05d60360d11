// crates/bm-cli/src/commands/mod.rs - Command Handler Modules
//
// One module per user-facing verb. Every handler follows the same shape:
// load the whole storage file, change the map in memory, save it back (only
// when something changed), and report what happened through the output sink.
//
// - new: add a book under a freshly generated ID
// - show: print one book
// - ls: print every book
// - set: move a book's bookmark to another page
// - rm: forget a book

pub mod ls;
pub mod new;
pub mod rm;
pub mod set;
pub mod show;

use bm_core::{ArgsError, Command, CommandSpec, Output, Result};

use crate::context::Context;

/// Every command bm understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookCommand {
    New,
    Show,
    List,
    Set,
    Remove,
}

impl BookCommand {
    /// Registration order, which is also the order shown in help
    pub const ALL: [BookCommand; 5] = [Self::New, Self::Show, Self::List, Self::Set, Self::Remove];

    pub fn name(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Show => "show",
            Self::List => "ls",
            Self::Set => "set",
            Self::Remove => "rm",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Self::New => "new <title>",
            Self::Show => "show <id>",
            Self::List => "ls",
            Self::Set => "set <id> <page>",
            Self::Remove => "rm <id>",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::New => "create a new book",
            Self::Show => "show page number of the book <id>",
            Self::List => "list all books",
            Self::Set => "set page number of book <id> to <page>",
            Self::Remove => "remove book",
        }
    }

    pub fn arg_count(self) -> usize {
        match self {
            Self::List => 0,
            Self::New | Self::Show | Self::Remove => 1,
            Self::Set => 2,
        }
    }

    fn spec(self) -> CommandSpec<Self> {
        CommandSpec {
            name: self.name(),
            usage: self.usage(),
            description: self.description(),
            arg_count: self.arg_count(),
            command: self,
        }
    }
}

impl Command<Context> for BookCommand {
    fn execute(&self, ctx: &Context, args: &[String], out: &mut dyn Output) -> Result<()> {
        match (self, args) {
            (Self::New, [title]) => new::handle(ctx, title, out),
            (Self::Show, [id]) => show::handle(ctx, id, out),
            (Self::List, []) => ls::handle(ctx, out),
            (Self::Set, [id, page]) => set::handle(ctx, id, page, out),
            (Self::Remove, [id]) => rm::handle(ctx, id, out),
            _ => Err(ArgsError::ArityMismatch {
                command: self.name().to_string(),
                expected: self.arg_count(),
                got: args.len(),
            }
            .into()),
        }
    }
}

/// The command table handed to the dispatcher
pub fn registry() -> Vec<CommandSpec<BookCommand>> {
    BookCommand::ALL.into_iter().map(BookCommand::spec).collect()
}

/// One-line summary of a book: "Dune" (dune123456): page 42.
pub fn format_status(title: &str, id: &str, page: i64) -> String {
    format!("\"{title}\" ({id}): page {page}.")
}
