#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use crate::app_config::AppConfig;
use args::{CliArgs, Command};
use clap::Parser;
use commands::{config::config_cmd, init::init_cmd, note::note_cmd};
use profile::{get_profile_path, Profile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app_config;
mod args;
mod commands;
mod formatters;
mod profile;


#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let args = CliArgs::parse();

    let profile_path = get_profile_path(&args.config.profile_path);

    if let Some(command) = args.command {
        let profile = Profile::from_path(&profile_path)?;
        let config = AppConfig::from_args(args.config, &profile_path, profile.as_ref());

        match command {
            Command::Config => config_cmd(&config)?,
            Command::Init => init_cmd(&config, &profile_path)?,
            Command::Note(subcommand) => note_cmd(&config, subcommand).await?,
            Command::New(args) => note_cmd(&config, args::NoteCommand::Add(args)).await?,
        }
    }

    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "noteboard_core=warn".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
