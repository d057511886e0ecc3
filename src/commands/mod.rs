//! Commands offered by the `api-template` binary

pub mod serve;
pub mod show_config;
pub mod version;

pub use serve::ServeCommand;
pub use show_config::ConfigCommand;
pub use version::VersionCommand;

use crate::{
    cli::{Command, Registry},
    config::Config,
    error::Result,
};

/// Program name used in usage lines
pub const APP_NAME: &str = "api-template";

/// Register every application command.
///
/// Each factory clones what it needs from `config`; nothing is built until dispatch.
pub fn registry(config: &Config) -> Result<Registry> {
    let serve_config = config.clone();
    let dump_config = config.clone();
    let build = config.build.clone();

    Registry::new()
        .with("serve", move || {
            Ok(Box::new(ServeCommand::new(serve_config.clone())) as Box<dyn Command>)
        })?
        .with("config", move || {
            Ok(Box::new(ConfigCommand::new(dump_config.clone())) as Box<dyn Command>)
        })?
        .with("version", move || {
            Ok(Box::new(VersionCommand::new(APP_NAME, build.clone())) as Box<dyn Command>)
        })
}
