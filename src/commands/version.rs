//! `version`: print build information

use crate::{cli::Command, utils::env::BuildInfo};

pub struct VersionCommand {
    app_name: String,
    build: BuildInfo,
}

impl VersionCommand {
    pub fn new(app_name: impl Into<String>, build: BuildInfo) -> Self {
        Self {
            app_name: app_name.into(),
            build,
        }
    }

    /// The line printed by `run`
    pub fn render(&self) -> String {
        format!(
            "{} {} (built {})",
            self.app_name, self.build.tag, self.build.date
        )
    }
}

impl Command for VersionCommand {
    fn help(&self) -> String {
        "Prints the build tag and build date.\n".to_string()
    }

    fn synopsis(&self) -> String {
        "Print build information".to_string()
    }

    fn run(&mut self, _args: &[String]) -> i32 {
        println!("{}", self.render());
        0
    }
}
