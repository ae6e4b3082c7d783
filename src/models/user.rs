use crate::models::Role;

/// Input for a single account insert. The password is already hashed by the
/// time this struct exists; plaintext never crosses the store boundary.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
