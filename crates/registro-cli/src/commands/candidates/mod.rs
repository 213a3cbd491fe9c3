//! Candidate subcommand implementations.

mod delete;
mod list;
mod update;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct CandidatesCommand {
    #[command(subcommand)]
    pub command: CandidatesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CandidatesSubcommand {
    /// List candidates with search, elected filter and pagination
    List(list::ListArgs),

    /// Update fields of a candidate
    Update(update::UpdateArgs),

    /// Delete a candidate
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: CandidatesCommand) -> Result<()> {
    match cmd.command {
        CandidatesSubcommand::List(args) => list::run(args).await,
        CandidatesSubcommand::Update(args) => update::run(args).await,
        CandidatesSubcommand::Delete(args) => delete::run(args).await,
    }
}
