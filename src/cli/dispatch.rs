//! Top-level dispatcher: picks help or a registered command from the argument vector

use super::command::Registry;
use super::help::{
    HelpCommand, HelpFunc, default_help_func, write_instantiation_error, write_unknown_command,
};
use crate::cli::Command;
use crate::error::{AppError, Result};
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::{debug, instrument};

/// Tokens that select help when they appear as the first argument
pub const HELP_TRIGGERS: [&str; 3] = ["-h", "--help", "help"];

/// Command-line dispatcher for a single process invocation
pub struct Cli<W: Write = io::Stdout> {
    /// Application name, used in usage lines
    pub name: String,
    /// Application version, informational only
    pub version: String,
    args: Vec<String>,
    registry: Registry,
    help_func: HelpFunc,
    writer: W,
    is_help: OnceLock<bool>,
}

impl Cli {
    /// Create a dispatcher writing help to stdout with the default listing
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            args: Vec::new(),
            registry: Registry::new(),
            help_func: Box::new(default_help_func),
            writer: io::stdout(),
            is_help: OnceLock::new(),
        }
    }
}

impl<W: Write> Cli<W> {
    /// Arguments to dispatch, without the program name
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the listing renderer
    pub fn with_help_func<F>(mut self, help_func: F) -> Self
    where
        F: Fn(&Registry) -> String + Send + Sync + 'static,
    {
        self.help_func = Box::new(help_func);
        self
    }

    /// Send help and error text to `writer` instead
    pub fn with_writer<W2: Write>(self, writer: W2) -> Cli<W2> {
        Cli {
            name: self.name,
            version: self.version,
            args: self.args,
            registry: self.registry,
            help_func: self.help_func,
            writer,
            is_help: self.is_help,
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Mutable access to the arguments. Does not affect an already made help decision.
    pub fn args_mut(&mut self) -> &mut Vec<String> {
        &mut self.args
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Whether this invocation asks for help.
    ///
    /// Decided once, on first call, and cached for the lifetime of the dispatcher.
    pub fn is_help(&self) -> bool {
        *self.is_help.get_or_init(|| is_help_request(&self.args))
    }

    /// Dispatch the arguments.
    ///
    /// Returns the exit code to use. Unknown commands, and a command-mode
    /// dispatch left without arguments, are reported on the writer with exit code 1. A factory failure is reported on the writer
    /// and also returned as [`AppError::Instantiate`].
    #[instrument(skip(self), fields(name = %self.name, version = %self.version))]
    pub fn run(&mut self) -> Result<i32> {
        if self.is_help() {
            debug!("Dispatching to help");
            let mut help = HelpCommand::new(
                &self.name,
                &self.registry,
                &self.help_func,
                &mut self.writer,
            );
            return Ok(help.run(&self.args));
        }

        // Arguments can be emptied after the help decision was cached
        let Some(command_name) = self.args.first().map(String::as_str) else {
            debug!("No command name to dispatch");
            let listing = (self.help_func)(&self.registry);
            let _ = write!(self.writer, "{listing}");
            return Ok(1);
        };
        let Some(factory) = self.registry.get(command_name) else {
            debug!("Unknown command: {}", command_name);
            let listing = (self.help_func)(&self.registry);
            write_unknown_command(&mut self.writer, command_name, &listing);
            return Ok(1);
        };

        let mut command = match factory() {
            Ok(command) => command,
            Err(e) => {
                write_instantiation_error(&mut self.writer, command_name, &e);
                return Err(AppError::instantiate(command_name, e));
            }
        };

        debug!("Running command: {}", command_name);
        Ok(command.run(&self.args[1..]))
    }
}

fn is_help_request(args: &[String]) -> bool {
    match args.first() {
        None => true,
        Some(first) => HELP_TRIGGERS.contains(&first.as_str()),
    }
}
