//! `config`: print the effective configuration

use crate::{cli::Command, config::Config};

pub struct ConfigCommand {
    config: Config,
}

impl ConfigCommand {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Command for ConfigCommand {
    fn help(&self) -> String {
        "Prints the configuration resolved from the environment as JSON.\n\n\
         Variables:\n  \
         ENVIRONMENT  local, development or production (default: local)\n  \
         PORT         port for the API server (default: 3000)\n  \
         DEBUG        enable debug logging (default: false)\n"
            .to_string()
    }

    fn synopsis(&self) -> String {
        "Print the effective configuration".to_string()
    }

    fn run(&mut self, _args: &[String]) -> i32 {
        println!("{}", self.config.dump());
        0
    }
}
