//! People subcommand implementations.

mod add;
mod delete;
mod list;
mod update;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct PeopleCommand {
    #[command(subcommand)]
    pub command: PeopleSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PeopleSubcommand {
    /// List people with search and pagination
    List(list::ListArgs),

    /// Register a new person
    Add(add::AddArgs),

    /// Update fields of a registered person
    Update(update::UpdateArgs),

    /// Delete a registered person
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: PeopleCommand) -> Result<()> {
    match cmd.command {
        PeopleSubcommand::List(args) => list::run(args).await,
        PeopleSubcommand::Add(args) => add::run(args).await,
        PeopleSubcommand::Update(args) => update::run(args).await,
        PeopleSubcommand::Delete(args) => delete::run(args).await,
    }
}

/// Parse a `YYYY-MM-DD` date argument.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", value))
}
