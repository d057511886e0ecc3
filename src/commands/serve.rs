//! `serve`: run the HTTP API until interrupted

use crate::{
    api::{self, AppState},
    cli::Command,
    config::Config,
    error::{AppError, Result},
};
use clap::{CommandFactory as _, Parser};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::{error, info, instrument, warn};

/// Run the API server
#[derive(Parser, Debug)]
#[command(name = "serve")]
pub struct ServeArgs {
    /// Port to listen on [default: PORT from the environment]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
}

pub struct ServeCommand {
    config: Config,
}

impl ServeCommand {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Address to bind, preferring command-line values over configuration
    pub fn bind_addr(&self, args: &ServeArgs) -> SocketAddr {
        SocketAddr::new(args.host, args.port.unwrap_or(self.config.port))
    }

    #[instrument(skip(self))]
    fn serve_blocking(&self, addr: SocketAddr) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::server("failed to start async runtime", e))?;

        let state = AppState::new(self.config.build.clone());
        info!(
            "Environment: {}, build {} ({})",
            self.config.environment(),
            self.config.build.tag,
            self.config.build.date
        );

        runtime.block_on(async move {
            let listener = TcpListener::bind(addr)
                .await
                .map_err(|e| AppError::server(format!("failed to bind {addr}"), e))?;
            api::serve(listener, state, shutdown_signal()).await
        })
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

impl Command for ServeCommand {
    fn help(&self) -> String {
        ServeArgs::command().render_long_help().to_string()
    }

    fn synopsis(&self) -> String {
        "Run the API server".to_string()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        let argv = std::iter::once("serve").chain(args.iter().map(String::as_str));
        let parsed = match ServeArgs::try_parse_from(argv) {
            Ok(parsed) => parsed,
            Err(e) => {
                let _ = e.print();
                return e.exit_code();
            }
        };

        match self.serve_blocking(self.bind_addr(&parsed)) {
            Ok(()) => 0,
            Err(e) => {
                error!("{}", e);
                1
            }
        }
    }
}
