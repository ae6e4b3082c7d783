pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, SeedOverrides, cmd_check, cmd_init, cmd_seed, cmd_verify};
pub use config::Config;

pub async fn run() -> Result<()> {
    let config = Config::load()?;
    config.validate()?;

    init_tracing(&config);

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Seed {
            email,
            username,
            password,
            role,
            json,
        }) => {
            let overrides = SeedOverrides {
                email,
                username,
                password,
                role,
            };
            cmd_seed(&config, overrides, json).await
        }

        Some(Commands::Verify { username, password }) => {
            cmd_verify(&config, &username, &password).await
        }

        Some(Commands::Check) => cmd_check(&config).await,

        Some(Commands::Init) => cmd_init(),

        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
