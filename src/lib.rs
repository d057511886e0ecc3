//! # API Template
//!
//! A small API service scaffold built around a command dispatcher.
//! Commands are registered by name with lazy factories; the first
//! command-line argument selects one, or asks for help.
//!
//! ## Features
//!
//! - Lazy, fallible command construction
//! - Sorted command listing and per-command usage text
//! - Environment-driven configuration
//! - An HTTP health endpoint behind recover/logging/timeout/CORS middleware
//!
//! ## Example
//!
//! ```no_run
//! use api_template::cli::{Cli, Command, Registry};
//!
//! struct Hello;
//!
//! impl Command for Hello {
//!     fn help(&self) -> String { "hello [name]".to_string() }
//!     fn synopsis(&self) -> String { "Say hello".to_string() }
//!     fn run(&mut self, args: &[String]) -> i32 {
//!         println!("hello {}", args.first().map_or("world", String::as_str));
//!         0
//!     }
//! }
//!
//! let registry = Registry::new().with("hello", || Ok(Box::new(Hello) as Box<dyn Command>))?;
//! let mut cli = Cli::new("greeter", "1.0.0")
//!     .with_args(std::env::args().skip(1))
//!     .with_registry(registry);
//! let code = cli.run()?;
//! std::process::exit(code);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod middleware;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// `RUST_LOG` wins when set. Logs go to stderr; stdout carries command output.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
