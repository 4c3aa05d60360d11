// crates/bm-core/src/args.rs - Command registry and dispatcher
//
// bm's command line is deliberately small: a command name followed by an
// exact number of positional arguments, plus -h/--help anywhere. The
// dispatcher turns the raw argument list into one of five outcomes:
//
//   []                     -> NoArgs           (help)
//   [-h | --help, ..]      -> HelpRequested    (help)
//   [unknown, ..]          -> CommandNotFound  (error)
//   [cmd, .., -h, ..]      -> HelpRequested    (help, even with bad arity)
//   [cmd, args..]          -> ArityMismatch    (error) or Dispatched
//
// The registry is a flat list scanned in order; the first matching name wins.

use std::num::ParseIntError;
use thiserror::Error;
use tracing::debug;

use crate::error::Result;
use crate::output::{Marker, Output};

/// Arguments that request help wherever they appear
pub const HELP_FLAGS: [&str; 2] = ["-h", "--help"];

/// Errors caused by what the user typed
#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("invalid number of arguments for command {command}: expected {expected}, got {got}")]
    ArityMismatch {
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("`{value}` is not a valid integer: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl ArgsError {
    /// Parse an integer argument
    pub fn parse_int(value: &str) -> std::result::Result<i64, Self> {
        value.parse().map_err(|source| Self::InvalidNumber {
            value: value.to_string(),
            source,
        })
    }
}

/// Program information shown in help
#[derive(Debug, Clone)]
pub struct ProgramMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub author: &'static str,
}

/// Something a registered command can do
///
/// `Ctx` is whatever the application hands to every command (for bm, the
/// storage location). `args` holds exactly as many elements as the command
/// was registered with.
pub trait Command<Ctx: ?Sized> {
    fn execute(&self, ctx: &Ctx, args: &[String], out: &mut dyn Output) -> Result<()>;
}

/// A registered command
#[derive(Debug, Clone)]
pub struct CommandSpec<C> {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    /// Exact number of arguments the command takes
    pub arg_count: usize,
    pub command: C,
}

/// What an argument list means, before anything is executed
#[derive(Debug)]
pub enum Resolution<'r, 'a, C> {
    NoArgs,
    HelpRequested,
    CommandNotFound(&'a str),
    ArityMismatch {
        spec: &'r CommandSpec<C>,
        got: usize,
    },
    Dispatched {
        spec: &'r CommandSpec<C>,
        args: &'a [String],
    },
}

/// How a successful dispatch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Help was printed, nothing was executed
    Help,
    /// A command ran to completion
    Executed,
}

/// Matches argument lists against the registry and runs commands
#[derive(Debug)]
pub struct Dispatcher<C> {
    meta: ProgramMeta,
    commands: Vec<CommandSpec<C>>,
}

impl<C> Dispatcher<C> {
    pub fn new(meta: ProgramMeta, commands: Vec<CommandSpec<C>>) -> Self {
        Self { meta, commands }
    }

    pub fn meta(&self) -> &ProgramMeta {
        &self.meta
    }

    pub fn commands(&self) -> &[CommandSpec<C>] {
        &self.commands
    }

    /// First registered command called `name`
    pub fn find(&self, name: &str) -> Option<&CommandSpec<C>> {
        self.commands.iter().find(|spec| spec.name == name)
    }

    /// Classify an argument list (program name already removed)
    pub fn resolve<'a>(&self, args: &'a [String]) -> Resolution<'_, 'a, C> {
        let Some((name, rest)) = args.split_first() else {
            return Resolution::NoArgs;
        };

        if is_help_flag(name) {
            return Resolution::HelpRequested;
        }

        let Some(spec) = self.find(name) else {
            return Resolution::CommandNotFound(name.as_str());
        };

        if rest.iter().any(|arg| is_help_flag(arg)) {
            return Resolution::HelpRequested;
        }

        if rest.len() != spec.arg_count {
            return Resolution::ArityMismatch {
                spec,
                got: rest.len(),
            };
        }

        Resolution::Dispatched { spec, args: rest }
    }

    /// Resolve `args` and act on it
    ///
    /// Help is written to `out`. Errors from the command itself are returned
    /// exactly as the command produced them.
    pub fn dispatch<Ctx: ?Sized>(
        &self,
        args: &[String],
        ctx: &Ctx,
        out: &mut dyn Output,
    ) -> Result<Outcome>
    where
        C: Command<Ctx>,
    {
        match self.resolve(args) {
            Resolution::NoArgs | Resolution::HelpRequested => {
                debug!("rendering help");
                self.render_help(out);
                Ok(Outcome::Help)
            }
            Resolution::CommandNotFound(name) => {
                Err(ArgsError::UnknownCommand(name.to_string()).into())
            }
            Resolution::ArityMismatch { spec, got } => Err(ArgsError::ArityMismatch {
                command: spec.name.to_string(),
                expected: spec.arg_count,
                got,
            }
            .into()),
            Resolution::Dispatched { spec, args } => {
                debug!(command = spec.name, ?args, "dispatching");
                spec.command.execute(ctx, args, out)?;
                Ok(Outcome::Executed)
            }
        }
    }

    /// Write the help text
    pub fn render_help(&self, out: &mut dyn Output) {
        let width = self
            .commands
            .iter()
            .map(|spec| spec.usage.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = vec![
            "Usage:".to_string(),
            format!(
                "\t{} [--help/-h] <command> [--help/-h] [args...]",
                self.meta.name
            ),
            String::new(),
            "Description:".to_string(),
            format!("\t{}", self.meta.description),
            String::new(),
            "Version:".to_string(),
            format!("\t{}", self.meta.version),
            String::new(),
            "Commands:".to_string(),
        ];
        // Four spaces past the longest usage
        lines.extend(
            self.commands
                .iter()
                .map(|spec| format!("\t{:<width$}    {}", spec.usage, spec.description)),
        );
        lines.extend([
            String::new(),
            "Author:".to_string(),
            format!("\t{}", self.meta.author),
        ]);

        for line in &lines {
            out.emit(Marker::Plain, line);
        }
    }
}

fn is_help_flag(arg: &str) -> bool {
    HELP_FLAGS.contains(&arg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::output::MemoryOutput;
    use std::cell::RefCell;

    /// Records every call so tests can see what was executed
    type Calls = RefCell<Vec<(&'static str, Vec<String>)>>;

    #[derive(Debug, Clone, Copy)]
    enum Recorder {
        Echo,
        Pair,
        Nothing,
        Fail,
        Shadowed,
    }

    impl Command<Calls> for Recorder {
        fn execute(&self, calls: &Calls, args: &[String], out: &mut dyn Output) -> Result<()> {
            let name = match self {
                Self::Echo => "echo",
                Self::Pair => "pair",
                Self::Nothing => "nothing",
                Self::Fail => return Err(Error::NotFound(args[0].clone())),
                Self::Shadowed => "shadowed",
            };
            calls.borrow_mut().push((name, args.to_vec()));
            out.emit(Marker::Added, name);
            Ok(())
        }
    }

    fn spec(name: &'static str, usage: &'static str, arg_count: usize, command: Recorder) -> CommandSpec<Recorder> {
        CommandSpec {
            name,
            usage,
            description: "does things",
            arg_count,
            command,
        }
    }

    fn dispatcher() -> Dispatcher<Recorder> {
        Dispatcher::new(
            ProgramMeta {
                name: "demo",
                description: "demo - a test program",
                version: "1.2.3",
                author: "someone <someone@example.com>",
            },
            vec![
                spec("echo", "echo <word>", 1, Recorder::Echo),
                spec("pair", "pair <a> <b>", 2, Recorder::Pair),
                spec("nothing", "nothing", 0, Recorder::Nothing),
                spec("fail", "fail <id>", 1, Recorder::Fail),
                spec("echo", "echo <again>", 1, Recorder::Shadowed),
            ],
        )
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(list: &[&str]) -> (Result<Outcome>, Vec<(&'static str, Vec<String>)>, MemoryOutput) {
        let calls = Calls::default();
        let mut out = MemoryOutput::new();
        let result = dispatcher().dispatch(&args(list), &calls, &mut out);
        (result, calls.into_inner(), out)
    }

    #[test]
    fn test_resolve_states() {
        let d = dispatcher();

        assert!(matches!(d.resolve(&args(&[])), Resolution::NoArgs));
        assert!(matches!(d.resolve(&args(&["-h"])), Resolution::HelpRequested));
        assert!(matches!(d.resolve(&args(&["--help", "x"])), Resolution::HelpRequested));
        assert!(matches!(
            d.resolve(&args(&["nope"])),
            Resolution::CommandNotFound("nope")
        ));
        assert!(matches!(
            d.resolve(&args(&["pair", "1"])),
            Resolution::ArityMismatch { got: 1, .. }
        ));
        match d.resolve(&args(&["pair", "a", "b"])) {
            Resolution::Dispatched { spec, args } => {
                assert_eq!(spec.name, "pair");
                assert_eq!(args, ["a", "b"]);
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_no_args_renders_help() {
        let (result, calls, out) = run(&[]);
        assert_eq!(result.unwrap(), Outcome::Help);
        assert!(calls.is_empty());
        assert_eq!(out.lines()[0], "Usage:");
    }

    #[test]
    fn test_help_flag_first() {
        for flag in HELP_FLAGS {
            let (result, calls, out) = run(&[flag]);
            assert_eq!(result.unwrap(), Outcome::Help);
            assert!(calls.is_empty());
            assert!(!out.lines().is_empty());
        }
    }

    #[test]
    fn test_help_flag_beats_unknown_command_only_when_first() {
        let (result, _, _) = run(&["--help", "nope"]);
        assert_eq!(result.unwrap(), Outcome::Help);

        let (result, _, out) = run(&["nope", "--help"]);
        assert!(matches!(
            result,
            Err(Error::Args(ArgsError::UnknownCommand(ref name))) if name == "nope"
        ));
        assert!(out.lines().is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let (result, calls, out) = run(&["frobnicate", "x"]);
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "unknown command `frobnicate`");
        assert!(calls.is_empty());
        assert!(out.lines().is_empty());
    }

    #[test]
    fn test_trailing_help_beats_arity() {
        // right count but help among the args
        let (result, calls, _) = run(&["pair", "-h", "5"]);
        assert_eq!(result.unwrap(), Outcome::Help);
        assert!(calls.is_empty());

        // too few
        let (result, _, _) = run(&["pair", "--help"]);
        assert_eq!(result.unwrap(), Outcome::Help);

        // too many
        let (result, _, _) = run(&["nothing", "a", "b", "-h"]);
        assert_eq!(result.unwrap(), Outcome::Help);
    }

    #[test]
    fn test_arity_must_match_exactly() {
        for list in [&["pair", "a"][..], &["pair", "a", "b", "c"][..]] {
            let (result, calls, _) = run(list);
            match result {
                Err(Error::Args(ArgsError::ArityMismatch {
                    command,
                    expected,
                    got,
                })) => {
                    assert_eq!(command, "pair");
                    assert_eq!(expected, 2);
                    assert_eq!(got, list.len() - 1);
                }
                other => panic!("expected arity mismatch, got {other:?}"),
            }
            assert!(calls.is_empty());
        }

        let (result, _, _) = run(&["nothing", "extra"]);
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number of arguments for command nothing: expected 0, got 1"
        );
    }

    #[test]
    fn test_dispatch_passes_exact_args() {
        let (result, calls, out) = run(&["pair", "a", "b"]);
        assert_eq!(result.unwrap(), Outcome::Executed);
        assert_eq!(calls, vec![("pair", args(&["a", "b"]))]);
        assert_eq!(out.lines(), ["(+) pair"]);

        let (result, calls, _) = run(&["nothing"]);
        assert_eq!(result.unwrap(), Outcome::Executed);
        assert_eq!(calls, vec![("nothing", Vec::new())]);
    }

    #[test]
    fn test_first_registration_wins() {
        let (_, calls, _) = run(&["echo", "hi"]);
        assert_eq!(calls, vec![("echo", args(&["hi"]))]);
    }

    #[test]
    fn test_command_error_is_propagated() {
        let (result, _, _) = run(&["fail", "abc"]);
        assert!(matches!(result, Err(Error::NotFound(ref id)) if id == "abc"));
    }

    #[test]
    fn test_help_layout() {
        let mut out = MemoryOutput::new();
        dispatcher().render_help(&mut out);

        let expected = [
            "Usage:",
            "\tdemo [--help/-h] <command> [--help/-h] [args...]",
            "",
            "Description:",
            "\tdemo - a test program",
            "",
            "Version:",
            "\t1.2.3",
            "",
            "Commands:",
            "\techo <word>     does things",
            "\tpair <a> <b>    does things",
            "\tnothing         does things",
            "\tfail <id>       does things",
            "\techo <again>    does things",
            "",
            "Author:",
            "\tsomeone <someone@example.com>",
        ];
        assert_eq!(out.lines(), expected);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(ArgsError::parse_int("42").unwrap(), 42);
        assert_eq!(ArgsError::parse_int("-3").unwrap(), -3);
        assert!(matches!(
            ArgsError::parse_int("forty"),
            Err(ArgsError::InvalidNumber { ref value, .. }) if value == "forty"
        ));
    }
}
