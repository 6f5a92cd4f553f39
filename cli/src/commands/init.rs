use std::path::Path;

use crate::{app_config::AppConfig, profile::Profile};

pub fn init_cmd(config: &AppConfig, profile_path: &Path) -> anyhow::Result<()> {
    if profile_path.exists() {
        anyhow::bail!("Profile already exists at {:?}", profile_path);
    }

    let profile = Profile {
        api_url: Some(config.api_url.clone()),
    };
    profile.save(profile_path)?;

    println!("Profile created at {:?}", profile_path);

    Ok(())
}
