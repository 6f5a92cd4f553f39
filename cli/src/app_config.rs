use std::path::Path;

use serde::Serialize;

use crate::{args::ConfigArgs, profile::Profile};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Serialize)]
pub struct AppConfig {
    pub profile_path: String,
    pub api_url: String,
    pub profile_exists: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            profile_path: "./".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            profile_exists: false,
        }
    }
}

impl AppConfig {
    /// Resolution order: CLI flag or env var, then the profile file,
    /// then the built-in default
    pub fn from_args(args: ConfigArgs, profile_path: &Path, profile: Option<&Profile>) -> Self {
        let defaults = AppConfig::default();

        let api_url = args
            .api_url
            .or_else(|| profile.and_then(|p| p.api_url.clone()))
            .unwrap_or(defaults.api_url);

        AppConfig {
            profile_exists: profile.is_some(),
            profile_path: profile_path
                .to_str()
                .map(|p| p.to_string())
                .unwrap_or(defaults.profile_path),
            api_url,
        }
    }
}
