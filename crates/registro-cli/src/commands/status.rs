//! Status command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct StatusArgs {}

pub fn run(_args: StatusArgs) -> Result<()> {
    match profile::load_profile()? {
        Some(profile) => {
            output::field("Gateway", profile.gateway_url.as_str());
            output::field("API key", &profile.masked_key());
            output::field("Page size", &profile.per_page.to_string());
        }
        None => {
            output::warning("Not connected. Run 'registro connect' first.");
        }
    }
    Ok(())
}
