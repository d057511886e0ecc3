//! Command-line dispatch framework
//!
//! A registry of lazily built commands, a help subsystem, and the dispatcher
//! that routes the first argument to one or the other.

pub mod command;
pub mod dispatch;
pub mod help;

pub use command::{Command, CommandFactory, Registry};
pub use dispatch::{Cli, HELP_TRIGGERS};
pub use help::{HelpCommand, HelpFunc, default_help_func};
