//! Person deletion screen.

use anyhow::{Context, Result, anyhow};
use clap::Args;

use registro_core::{Person, RecordBrowser, RecordId};

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Identifier of the record to delete
    pub id: String,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let profile = profile::load_profile()?
        .context("Not connected. Run 'registro connect' first.")?;

    let id: RecordId = args.id.parse().context("Invalid record id")?;

    let per_page = profile.per_page;
    let mut browser = RecordBrowser::<Person, _>::new(profile.store(), per_page)
        .context("Invalid page size")?;

    browser
        .delete(id)
        .await
        .map_err(|err| anyhow!(err.message))?;

    output::success(&format!("Deleted record {}", id));
    Ok(())
}
