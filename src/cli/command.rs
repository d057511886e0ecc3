//! The command contract and the registry of lazily-built commands

use crate::error::{AppError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// A unit of work selectable from the command line
pub trait Command {
    /// Long-form usage text, shown by `help <command>`
    fn help(&self) -> String;

    /// One-line description, shown in the command listing
    fn synopsis(&self) -> String;

    /// Execute with the arguments that follow the command name, returning an exit code
    fn run(&mut self, args: &[String]) -> i32;
}

/// Builds a command on demand. Construction may fail.
pub type CommandFactory = Box<dyn Fn() -> anyhow::Result<Box<dyn Command>> + Send + Sync>;

/// Mapping from command name to the factory that builds it.
///
/// Iteration is always in lexicographic order of the names.
#[derive(Default)]
pub struct Registry {
    commands: BTreeMap<String, CommandFactory>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`.
    ///
    /// Names must be non-empty and unique.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn() -> anyhow::Result<Box<dyn Command>> + Send + Sync + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(AppError::validation("command name must not be empty"));
        }
        if self.commands.contains_key(&name) {
            return Err(AppError::validation(format!(
                "command already registered: {name}"
            )));
        }

        self.commands.insert(name, Box::new(factory));
        Ok(())
    }

    /// Builder-style variant of [`Registry::register`]
    pub fn with<F>(mut self, name: impl Into<String>, factory: F) -> Result<Self>
    where
        F: Fn() -> anyhow::Result<Box<dyn Command>> + Send + Sync + 'static,
    {
        self.register(name, factory)?;
        Ok(self)
    }

    /// Look up the factory for `name`
    pub fn get(&self, name: &str) -> Option<&CommandFactory> {
        self.commands.get(name)
    }

    /// Registered names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.commands.keys()).finish()
    }
}
