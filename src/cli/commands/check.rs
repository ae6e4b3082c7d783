//! Check command handler

use anyhow::Result;

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_check(config: &Config) -> Result<()> {
    let store = Store::new(&config.general.database_path).await?;

    let ping = store.ping().await;
    let count = store.users().count().await;
    store.close().await?;

    ping?;
    let count = count?;

    println!(
        "✓ Store reachable at {} ({count} account(s))",
        config.general.database_path
    );
    Ok(())
}
