//! Disconnect command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct DisconnectArgs {}

pub fn run(_args: DisconnectArgs) -> Result<()> {
    if profile::clear_profile()? {
        output::success("Disconnected");
    } else {
        output::warning("No stored profile to remove.");
    }
    Ok(())
}
