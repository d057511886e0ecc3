//! Help rendering and the built-in help command

use super::command::{Command, Registry};
use std::io::Write;
use tracing::debug;

/// Renders the command listing for a registry
pub type HelpFunc = Box<dyn Fn(&Registry) -> String + Send + Sync>;

/// Default listing: every command in name order with its synopsis.
///
/// Each command is built only to read its synopsis. A command whose factory
/// fails is listed by name alone.
pub fn default_help_func(registry: &Registry) -> String {
    let mut names: Vec<&str> = registry.names().collect();
    names.sort_unstable();

    let mut buf = String::from("Available commands:\n\n");
    for name in names {
        let synopsis = registry
            .get(name)
            .map(|factory| factory())
            .and_then(|built| match built {
                Ok(command) => Some(command.synopsis()),
                Err(e) => {
                    debug!("Listing {} without synopsis: {}", name, e);
                    None
                }
            });

        buf.push_str("  ");
        buf.push_str(name);
        if let Some(synopsis) = synopsis {
            buf.push_str(" - ");
            buf.push_str(&synopsis);
        }
        buf.push('\n');
    }

    buf
}

// Sink write failures are dropped: the sink is the only place they could be reported.
pub(crate) fn write_unknown_command<W: Write>(writer: &mut W, name: &str, listing: &str) {
    let _ = writeln!(writer, "unknown command: {name}");
    let _ = writeln!(writer);
    let _ = write!(writer, "{listing}");
}

pub(crate) fn write_instantiation_error<W: Write>(
    writer: &mut W,
    name: &str,
    cause: &anyhow::Error,
) {
    let _ = writeln!(writer, "error instantiating {name}: {cause}");
}

/// Built-in command behind `help`, `-h`, `--help` and an empty argument list.
///
/// It receives the complete argument vector: index 0 is the help trigger and
/// index 1, when present, names the command to describe.
pub struct HelpCommand<'a, W: Write> {
    cli_name: &'a str,
    registry: &'a Registry,
    help_func: &'a HelpFunc,
    writer: &'a mut W,
}

impl<'a, W: Write> HelpCommand<'a, W> {
    pub fn new(
        cli_name: &'a str,
        registry: &'a Registry,
        help_func: &'a HelpFunc,
        writer: &'a mut W,
    ) -> Self {
        Self {
            cli_name,
            registry,
            help_func,
            writer,
        }
    }
}

impl<W: Write> Command for HelpCommand<'_, W> {
    fn help(&self) -> String {
        "Shows help for a command".to_string()
    }

    fn synopsis(&self) -> String {
        "Shows help".to_string()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        if args.len() <= 1 {
            let listing = (self.help_func)(self.registry);
            let _ = write!(self.writer, "{listing}");
            return 0;
        }

        let target = args[1].as_str();
        let Some(factory) = self.registry.get(target) else {
            let listing = (self.help_func)(self.registry);
            write_unknown_command(self.writer, target, &listing);
            return 1;
        };

        let command = match factory() {
            Ok(command) => command,
            Err(e) => {
                write_instantiation_error(self.writer, target, &e);
                return 1;
            }
        };

        let _ = writeln!(self.writer, "Usage: {} {}", self.cli_name, target);
        let _ = writeln!(self.writer);
        let _ = write!(self.writer, "{}", command.help());
        0
    }
}
