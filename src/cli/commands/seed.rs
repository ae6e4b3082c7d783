//! Seed command handler

use anyhow::{Context, Result};

use crate::config::Config;
use crate::db::Store;
use crate::services::{ProvisionOutcome, ProvisionService, SeaOrmUserStore};

/// CLI overrides for the configured administrator credentials.
#[derive(Debug, Default)]
pub struct SeedOverrides {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

pub async fn cmd_seed(config: &Config, overrides: SeedOverrides, json: bool) -> Result<()> {
    let mut admin = config.admin.clone();

    if let Some(email) = overrides.email {
        admin.email = email;
    }
    if let Some(username) = overrides.username {
        admin.username = username;
    }
    if let Some(password) = overrides.password {
        admin.password = password;
    }
    if let Some(role) = overrides.role {
        admin.role = role.parse().context("Invalid --role value")?;
    }

    admin.validate()?;

    let store = Store::new(&config.general.database_path).await?;
    let service = ProvisionService::new(SeaOrmUserStore::new(store), config.security.clone());

    let outcome = service
        .provision(&admin)
        .await
        .context("Administrator provisioning failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        ProvisionOutcome::Created { user } => {
            println!(
                "✓ Created administrator '{}' (ID: {}, role: {})",
                user.username, user.id, user.role
            );
        }
        ProvisionOutcome::AlreadyExists => {
            println!(
                "Administrator '{}' already exists, nothing to do.",
                admin.username
            );
        }
    }

    Ok(())
}
