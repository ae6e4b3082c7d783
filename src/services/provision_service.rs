//! Domain service for administrator provisioning.
//!
//! Creates the well-known administrator account if absent. Invoking it
//! repeatedly with the same configuration leaves exactly one account in the
//! store; the store connection is released on every exit path.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::task;
use tracing::{info, warn};

use crate::config::{AdminConfig, SecurityConfig};
use crate::db::hash_password;
use crate::models::{NewUser, Role};

/// Errors surfaced by a [`UserStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique constraint violated on email or username. Expected and
    /// recoverable; the provisioner maps it to
    /// [`ProvisionOutcome::AlreadyExists`].
    #[error("Account already exists: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Errors specific to the provisioning routine.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Identity of a created account, shaped so the web application's auth
/// layer can later build a session from it.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedUser {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProvisionOutcome {
    Created { user: CreatedUser },
    AlreadyExists,
}

/// Store capability needed by the provisioner: one conditional insert with
/// uniqueness enforcement, and explicit release of the connection.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates exactly one account record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] when another account already holds
    /// the email or username.
    async fn create_user(&self, user: NewUser) -> Result<CreatedUser, StoreError>;

    /// Releases the underlying connection.
    async fn close(&self) -> Result<(), StoreError>;
}

pub struct ProvisionService<S> {
    store: S,
    security: SecurityConfig,
}

impl<S: UserStore> ProvisionService<S> {
    #[must_use]
    pub const fn new(store: S, security: SecurityConfig) -> Self {
        Self { store, security }
    }

    /// Runs hash then insert, then releases the store connection regardless
    /// of which branch was taken. A close failure is logged but never masks
    /// the provisioning result.
    pub async fn provision(&self, admin: &AdminConfig) -> Result<ProvisionOutcome, ProvisionError> {
        let result = self.provision_inner(admin).await;

        if let Err(err) = self.store.close().await {
            warn!("Failed to close store connection: {err}");
        }

        result
    }

    async fn provision_inner(
        &self,
        admin: &AdminConfig,
    ) -> Result<ProvisionOutcome, ProvisionError> {
        let password = admin.password.clone();
        let security = self.security.clone();

        // Argon2 is CPU-bound; keep it off the async worker threads.
        let password_hash = task::spawn_blocking(move || hash_password(&password, &security))
            .await
            .map_err(|e| ProvisionError::Hash(format!("hashing task panicked: {e}")))?
            .map_err(|e| ProvisionError::Hash(e.to_string()))?;

        let new_user = NewUser {
            email: admin.email.clone(),
            username: admin.username.clone(),
            password_hash,
            role: admin.role,
            first_name: None,
            last_name: None,
        };

        match self.store.create_user(new_user).await {
            Ok(user) => {
                info!(
                    "Created administrator account '{}' (ID: {})",
                    user.username, user.id
                );
                Ok(ProvisionOutcome::Created { user })
            }
            Err(StoreError::Duplicate(detail)) => {
                info!("Administrator account already exists ({detail})");
                Ok(ProvisionOutcome::AlreadyExists)
            }
            Err(err) => Err(err.into()),
        }
    }
}
