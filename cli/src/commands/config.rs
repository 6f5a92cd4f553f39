use anyhow::Context;

use crate::app_config::AppConfig;

pub fn config_cmd(config: &AppConfig) -> anyhow::Result<()> {
    let rendered = toml::to_string(config).context("Failed to serialize configuration")?;

    print!("{rendered}");

    Ok(())
}
