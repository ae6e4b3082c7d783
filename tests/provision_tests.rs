//! End-to-end provisioning runs against a real sqlite store.

use std::path::PathBuf;

use lspa_admin::config::{AdminConfig, SecurityConfig};
use lspa_admin::db::Store;
use lspa_admin::models::Role;
use lspa_admin::services::{
    ProvisionError, ProvisionOutcome, ProvisionService, SeaOrmUserStore, StoreError,
};

struct TempDb {
    path: PathBuf,
    url: String,
}

impl TempDb {
    fn new() -> Self {
        let path =
            std::env::temp_dir().join(format!("lspa-admin-test-{}.db", uuid::Uuid::new_v4()));
        let url = format!("sqlite:{}", path.display());
        Self { path, url }
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.path).ok();
    }
}

fn fast_security() -> SecurityConfig {
    SecurityConfig {
        argon2_memory_cost_kib: 8,
        argon2_time_cost: 1,
        argon2_parallelism: 1,
    }
}

/// One operator invocation: fresh connection, provision, connection released.
async fn provision(db_url: &str, admin: &AdminConfig) -> Result<ProvisionOutcome, ProvisionError> {
    let store = Store::new(db_url).await.expect("failed to open store");
    let service = ProvisionService::new(SeaOrmUserStore::new(store), fast_security());
    service.provision(admin).await
}

#[tokio::test]
async fn fresh_store_creates_the_administrator() {
    let db = TempDb::new();

    let outcome = provision(&db.url, &AdminConfig::default()).await.unwrap();
    let ProvisionOutcome::Created { user } = outcome else {
        panic!("expected Created outcome");
    };
    assert_eq!(user.username, "admin");
    assert_eq!(user.role, Role::Directeur);

    let store = Store::new(&db.url).await.unwrap();
    let users = store.users();
    assert_eq!(users.count().await.unwrap(), 1);

    let (stored, password_hash) = users
        .get_by_username_with_password("admin")
        .await
        .unwrap()
        .expect("seeded account missing");
    assert_eq!(stored.email, "admin@lspa.com");
    assert_eq!(stored.role, "DIRECTEUR");
    assert_ne!(password_hash, "admin123");
    assert!(password_hash.starts_with("$argon2id$"));

    store.close().await.unwrap();
}

#[tokio::test]
async fn second_invocation_reports_already_exists() {
    let db = TempDb::new();
    let admin = AdminConfig::default();

    let first = provision(&db.url, &admin).await.unwrap();
    assert!(matches!(first, ProvisionOutcome::Created { .. }));

    let second = provision(&db.url, &admin).await.unwrap();
    assert!(matches!(second, ProvisionOutcome::AlreadyExists));

    let store = Store::new(&db.url).await.unwrap();
    assert_eq!(store.users().count().await.unwrap(), 1);
    store.close().await.unwrap();
}

#[tokio::test]
async fn duplicate_email_with_different_username_is_a_conflict() {
    let db = TempDb::new();

    provision(&db.url, &AdminConfig::default()).await.unwrap();

    let rival = AdminConfig {
        username: "other".to_string(),
        ..AdminConfig::default()
    };
    let outcome = provision(&db.url, &rival).await.unwrap();
    assert!(matches!(outcome, ProvisionOutcome::AlreadyExists));

    let store = Store::new(&db.url).await.unwrap();
    assert_eq!(store.users().count().await.unwrap(), 1);
    store.close().await.unwrap();
}

#[tokio::test]
async fn duplicate_username_with_different_email_is_a_conflict() {
    let db = TempDb::new();

    provision(&db.url, &AdminConfig::default()).await.unwrap();

    let rival = AdminConfig {
        email: "other@lspa.com".to_string(),
        ..AdminConfig::default()
    };
    let outcome = provision(&db.url, &rival).await.unwrap();
    assert!(matches!(outcome, ProvisionOutcome::AlreadyExists));

    let store = Store::new(&db.url).await.unwrap();
    assert_eq!(store.users().count().await.unwrap(), 1);
    store.close().await.unwrap();
}

#[tokio::test]
async fn distinct_accounts_can_coexist() {
    let db = TempDb::new();

    provision(&db.url, &AdminConfig::default()).await.unwrap();

    let second = AdminConfig {
        email: "secretaire@lspa.com".to_string(),
        username: "secretaire".to_string(),
        password: "autre123".to_string(),
        role: Role::Secretaire,
    };
    let outcome = provision(&db.url, &second).await.unwrap();
    assert!(matches!(outcome, ProvisionOutcome::Created { .. }));

    let store = Store::new(&db.url).await.unwrap();
    assert_eq!(store.users().count().await.unwrap(), 2);
    store.close().await.unwrap();
}

#[tokio::test]
async fn seeded_password_verifies_through_the_login_path() {
    let db = TempDb::new();

    provision(&db.url, &AdminConfig::default()).await.unwrap();

    let store = Store::new(&db.url).await.unwrap();
    let users = store.users();
    assert!(users.verify_password("admin", "admin123").await.unwrap());
    assert!(!users.verify_password("admin", "wrong").await.unwrap());
    assert!(!users.verify_password("nobody", "admin123").await.unwrap());
    store.close().await.unwrap();
}

#[tokio::test]
async fn unreachable_store_is_a_fatal_error() {
    // A directory where the database file should be makes the store
    // unreachable before any provisioning work happens.
    let dir = std::env::temp_dir().join(format!("lspa-admin-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let url = format!("sqlite:{}", dir.display());

    let result = Store::new(&url).await;
    assert!(result.is_err());

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn conflict_error_kind_is_distinguished_from_other_failures() {
    let db = TempDb::new();

    provision(&db.url, &AdminConfig::default()).await.unwrap();

    // Drive the raw store directly to observe the classified error.
    let store = Store::new(&db.url).await.unwrap();
    let sea_store = SeaOrmUserStore::new(store);

    use lspa_admin::models::NewUser;
    use lspa_admin::services::UserStore;

    let err = sea_store
        .create_user(NewUser {
            email: "admin@lspa.com".to_string(),
            username: "someone-else".to_string(),
            password_hash: "$argon2id$irrelevant".to_string(),
            role: Role::Directeur,
            first_name: None,
            last_name: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Duplicate(_)));
    sea_store.close().await.unwrap();
}
