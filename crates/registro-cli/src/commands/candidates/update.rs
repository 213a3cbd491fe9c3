//! Candidate update screen.

use anyhow::{Context, Result, anyhow, bail};
use clap::Args;

use registro_core::{Candidate, CandidatePatch, RecordBrowser, RecordId};

use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Identifier of the record to update
    pub id: String,

    #[arg(long)]
    pub full_name: Option<String>,

    #[arg(long)]
    pub ballot_name: Option<String>,

    #[arg(long)]
    pub party: Option<String>,

    #[arg(long)]
    pub office: Option<String>,

    #[arg(long)]
    pub candidacy_city: Option<String>,

    #[arg(long)]
    pub occupation: Option<String>,

    #[arg(long)]
    pub education_level: Option<String>,

    #[arg(long)]
    pub photo_url: Option<String>,

    /// Whether the candidate is endorsed by the office
    #[arg(long)]
    pub endorsed: Option<bool>,

    /// Whether the candidate won the election
    #[arg(long)]
    pub elected: Option<bool>,
}

pub async fn run(args: UpdateArgs) -> Result<()> {
    let profile = profile::load_profile()?
        .context("Not connected. Run 'registro connect' first.")?;

    let id: RecordId = args.id.parse().context("Invalid record id")?;

    let patch = CandidatePatch {
        full_name: args.full_name,
        ballot_name: args.ballot_name,
        party: args.party,
        office: args.office,
        candidacy_city: args.candidacy_city,
        occupation: args.occupation,
        education_level: args.education_level,
        photo_url: args.photo_url,
        endorsed: args.endorsed,
        elected: args.elected,
    };

    if patch.is_empty() {
        bail!("Nothing to update; pass at least one field option");
    }

    let per_page = profile.per_page;
    let mut browser = RecordBrowser::<Candidate, _>::new(profile.store(), per_page)
        .context("Invalid page size")?;

    let updated = browser
        .update(id, patch)
        .await
        .map_err(|err| anyhow!(err.message))?;

    output::success(&format!("Updated record {}", updated.id));
    Ok(())
}
