//! Init command handler

use anyhow::Result;

use crate::config::Config;

pub fn cmd_init() -> Result<()> {
    if Config::create_default_if_missing()? {
        println!("✓ Created default config.toml");
        println!("Edit the [admin] section before running 'lspa-admin seed'.");
    } else {
        println!("config.toml already exists, leaving it untouched.");
    }
    Ok(())
}
