//! Person creation screen.

use anyhow::{Context, Result, anyhow};
use clap::Args;

use registro_core::{NewPerson, Person, RecordBrowser};

use super::parse_date;
use crate::output;
use crate::profile;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Full name (required)
    #[arg(long)]
    pub name: String,

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
    pub education_level: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub photo_url: Option<String>,

    /// Whether the person is a community leader
    #[arg(long)]
    pub leadership: Option<bool>,

    /// Whether the person is a collaborator
    #[arg(long)]
    pub collaborator: Option<bool>,

    #[arg(long)]
    pub active: Option<bool>,

    #[arg(long)]
    pub registered_by: Option<String>,
}

pub async fn run(args: AddArgs) -> Result<()> {
    let profile = profile::load_profile()?
        .context("Not connected. Run 'registro connect' first.")?;

    let birth_date = args.birth_date.as_deref().map(parse_date).transpose()?;

    let new = NewPerson {
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
        education_level: args.education_level,
        role: args.role,
        organization_id: None,
        photo_url: args.photo_url,
        leadership: args.leadership,
        collaborator: args.collaborator,
        active: args.active,
        registered_by: args.registered_by,
    };

    let per_page = profile.per_page;
    let mut browser = RecordBrowser::<Person, _>::new(profile.store(), per_page)
        .context("Invalid page size")?;

    let created = browser
        .insert(new)
        .await
        .map_err(|err| anyhow!(err.message))?;

    output::success(&format!("Created record {}", created.id));
    Ok(())
}
