//! Connect command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use registro_core::{GatewayUrl, ListQuery, PageRequest, Person, RecordStore, ResultPage};

use crate::output;
use crate::profile::{self, Profile};

#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Gateway base URL (e.g. https://abc.example.co/rest/v1)
    #[arg(long)]
    pub url: String,

    /// Gateway API key
    #[arg(long)]
    pub key: String,

    /// Default page size for listings
    #[arg(long, default_value_t = 10)]
    pub per_page: u32,
}

pub async fn run(args: ConnectArgs) -> Result<()> {
    let gateway_url = GatewayUrl::new(&args.url).context("Invalid gateway URL")?;

    let candidate = Profile {
        gateway_url,
        api_key: args.key,
        per_page: args.per_page,
    };

    // Probe with a one-row query so a bad URL or key fails here, not on the
    // first listing.
    eprintln!("{}", "Checking gateway…".dimmed());
    let store = candidate.store();
    let probe: ResultPage<Person> = store
        .select(&ListQuery::new(PageRequest::first(1)?))
        .await
        .context("Failed to reach the gateway with the given URL and key")?;
    tracing::debug!(total = probe.total_count, "gateway probe succeeded");

    profile::save_profile(&candidate).context("Failed to save profile")?;

    output::success("Connected");
    println!();
    output::field("Gateway", candidate.gateway_url.as_str());
    output::field("Records", &probe.total_count.to_string());
    output::field("Page size", &candidate.per_page.to_string());

    Ok(())
}
