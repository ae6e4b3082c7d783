//! `SeaORM` implementation of the `UserStore` trait.

use async_trait::async_trait;
use sea_orm::SqlErr;

use crate::db::Store;
use crate::models::NewUser;
use crate::services::provision_service::{CreatedUser, StoreError, UserStore};

pub struct SeaOrmUserStore {
    store: Store,
}

impl SeaOrmUserStore {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserStore for SeaOrmUserStore {
    async fn create_user(&self, user: NewUser) -> Result<CreatedUser, StoreError> {
        match self.store.users().insert(&user).await {
            Ok(created) => Ok(CreatedUser {
                id: created.id,
                username: created.username,
                role: user.role,
            }),
            // Named error-kind check, the analogue of Prisma's P2002 code.
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    Err(StoreError::Duplicate(detail))
                }
                _ => Err(StoreError::Database(err.to_string())),
            },
        }
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.store
            .clone()
            .close()
            .await
            .map_err(|e| StoreError::Database(e.to_string()))
    }
}
