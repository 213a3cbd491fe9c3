//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::candidates::CandidatesCommand;
use crate::commands::connect::ConnectArgs;
use crate::commands::disconnect::DisconnectArgs;
use crate::commands::people::PeopleCommand;
use crate::commands::status::StatusArgs;

/// Administration CLI for civic-registry data in a hosted gateway.
#[derive(Parser, Debug)]
#[command(name = "registro")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store gateway connection settings after a probe query
    Connect(ConnectArgs),

    /// Display the active connection profile
    Status(StatusArgs),

    /// Remove the stored connection profile
    Disconnect(DisconnectArgs),

    /// People registry operations
    People(PeopleCommand),

    /// Mayoral-candidate registry operations
    Candidates(CandidatesCommand),
}
