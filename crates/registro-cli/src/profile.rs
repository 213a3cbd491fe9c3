//! Connection profile storage.
//!
//! The profile holds the gateway URL, API key and default page size. It is
//! the only local state the CLI keeps; record data never touches disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use registro_core::GatewayUrl;
use registro_rest::RestStore;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

fn default_per_page() -> u32 {
    10
}

/// Stored gateway connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub gateway_url: GatewayUrl,
    pub api_key: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Profile {
    /// Build a REST store from the stored settings.
    pub fn store(&self) -> RestStore {
        RestStore::new(self.gateway_url.clone(), self.api_key.clone())
    }

    /// The API key with everything but the last four characters masked.
    pub fn masked_key(&self) -> String {
        let visible: String = self
            .api_key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("…{}", visible)
    }
}

/// Get the profile file path.
fn profile_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "registro").context("Could not determine config directory")?;

    let config_dir = dirs.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config directory")?;

    Ok(config_dir.join("profile.json"))
}

/// Save the profile to disk.
pub fn save_profile(profile: &Profile) -> Result<()> {
    save_profile_to(&profile_path()?, profile)
}

fn save_profile_to(path: &Path, profile: &Profile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, &json).context("Failed to write profile file")?;

    // Restrictive permissions; the file carries the API key (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}

/// Load the profile from disk.
pub fn load_profile() -> Result<Option<Profile>> {
    load_profile_from(&profile_path()?)
}

fn load_profile_from(path: &Path) -> Result<Option<Profile>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path).context("Failed to read profile file")?;
    let profile: Profile = serde_json::from_str(&json).context("Invalid profile file")?;
    Ok(Some(profile))
}

/// Remove the stored profile.
pub fn clear_profile() -> Result<bool> {
    let path = profile_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove profile file")?;
        return Ok(true);
    }

    Ok(false)
}
