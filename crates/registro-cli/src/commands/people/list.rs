//! People listing screen.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use registro_core::{Person, RecordBrowser};

use crate::output;
use crate::profile;
use crate::screen;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page to show, 1-based
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page (defaults to the profile's page size)
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Free-text search over name, email and phone
    #[arg(long)]
    pub search: Option<String>,

    /// Print rows as JSON lines instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let profile = profile::load_profile()?
        .context("Not connected. Run 'registro connect' first.")?;

    let per_page = args.per_page.unwrap_or(profile.per_page);
    let mut browser = RecordBrowser::<Person, _>::new(profile.store(), per_page)
        .context("Invalid page size")?;

    browser.start_at(args.page);
    if let Some(term) = args.search {
        browser.start_search(term);
    }

    eprintln!("{}", "Loading…".dimmed());
    browser.refresh().await;

    // A --page beyond the end of the filtered set lands on the last page.
    if browser.error().is_none() && browser.page() > browser.total_pages() {
        browser.last().await;
    }

    if args.json {
        if let Some(message) = browser.error() {
            anyhow::bail!(message);
        }
        for row in browser.rows() {
            output::json(row)?;
        }
        return Ok(());
    }

    screen::render(&browser);
    Ok(())
}
