use anyhow::{Context, Result};
use api_template::{
    cli::Cli,
    commands::{self, APP_NAME},
    config::Config,
    setup_logging,
    utils::env::{BuildInfo, EnvUtils},
};
use tracing::error;

fn main() {
    let code = match try_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    };

    std::process::exit(code);
}

fn try_main() -> Result<i32> {
    let debug = EnvUtils::flag_or_default(EnvUtils::process_lookup, "DEBUG", false)
        .unwrap_or_default();
    setup_logging(debug)?;

    let config = Config::from_env(BuildInfo::detect()).context("Error parsing config")?;
    let registry = commands::registry(&config).context("Error registering commands")?;

    let mut cli = Cli::new(APP_NAME, config.build.tag.clone())
        .with_args(std::env::args().skip(1))
        .with_registry(registry);

    match cli.run() {
        Ok(code) => Ok(code),
        Err(e) => {
            error!("Error running command: {}", e);
            Ok(e.exit_code())
        }
    }
}
