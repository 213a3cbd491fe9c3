//! Person update screen.

use anyhow::{Context, Result, anyhow, bail};
use clap::Args;

use registro_core::{Person, PersonPatch, RecordBrowser, RecordId};

use super::parse_date;
use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Identifier of the record to update
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub nickname: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub street: Option<String>,

    #[arg(long)]
    pub house_number: Option<i64>,

    #[arg(long)]
    pub district: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// Birth date as YYYY-MM-DD
    #[arg(long)]
    pub birth_date: Option<String>,

    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long)]
    pub marital_status: Option<String>,

    #[arg(long)]
    pub profession: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub photo_url: Option<String>,

    #[arg(long)]
    pub leadership: Option<bool>,

    #[arg(long)]
    pub collaborator: Option<bool>,

    #[arg(long)]
    pub active: Option<bool>,
}

pub async fn run(args: UpdateArgs) -> Result<()> {
    let profile = profile::load_profile()?
        .context("Not connected. Run 'registro connect' first.")?;

    let id: RecordId = args.id.parse().context("Invalid record id")?;
    let birth_date = args.birth_date.as_deref().map(parse_date).transpose()?;

    let patch = PersonPatch {
        name: args.name,
        nickname: args.nickname,
        email: args.email,
        phone: args.phone,
        street: args.street,
        house_number: args.house_number,
        district: args.district,
        city: args.city,
        birth_date,
        gender: args.gender,
        marital_status: args.marital_status,
        profession: args.profession,
        role: args.role,
        photo_url: args.photo_url,
        leadership: args.leadership,
        collaborator: args.collaborator,
        active: args.active,
    };

    if patch.is_empty() {
        bail!("Nothing to update; pass at least one field option");
    }

    let per_page = profile.per_page;
    let mut browser = RecordBrowser::<Person, _>::new(profile.store(), per_page)
        .context("Invalid page size")?;

    let updated = browser
        .update(id, patch)
        .await
        .map_err(|err| anyhow!(err.message))?;

    output::success(&format!("Updated record {}", updated.id));
    Ok(())
}
