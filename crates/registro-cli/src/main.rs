//! registro - CLI for administering civic-registry data.
//!
//! This is a thin wrapper over the `registro` libraries: each subcommand
//! wires the record browser and the REST store into one screen.

mod cli;
mod commands;
mod output;
mod profile;
mod screen;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Connect(args) => commands::connect::run(args).await,
        Commands::Status(args) => commands::status::run(args),
        Commands::Disconnect(args) => commands::disconnect::run(args),
        Commands::People(cmd) => commands::people::handle(cmd).await,
        Commands::Candidates(cmd) => commands::candidates::handle(cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
