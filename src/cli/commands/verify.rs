//! Verify command handler

use anyhow::{Context, Result, bail};

use crate::config::Config;
use crate::db::Store;
use crate::models::{Role, Session, SessionUser};

pub async fn cmd_verify(config: &Config, username: &str, password: &str) -> Result<()> {
    let store = Store::new(&config.general.database_path).await?;

    // Capture the result first so the connection is released on every path.
    let result = verify_inner(&store, username, password).await;
    store.close().await?;

    let session = result?;
    println!("{}", serde_json::to_string_pretty(&session)?);
    Ok(())
}

async fn verify_inner(store: &Store, username: &str, password: &str) -> Result<Session> {
    let users = store.users();

    let valid = users.verify_password(username, password).await?;
    if !valid {
        bail!("Invalid credentials for '{username}'");
    }

    let user = users
        .get_by_username(username)
        .await?
        .context("Account disappeared during verification")?;

    let role: Role = user
        .role
        .parse()
        .with_context(|| format!("Account '{username}' has an unrecognized role"))?;

    Ok(Session {
        user: SessionUser {
            id: user.id,
            role,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
        },
    })
}
