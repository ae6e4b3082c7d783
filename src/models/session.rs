//! Payload shapes consumed by the web application's authentication layer.
//!
//! The login path (not part of this tool) builds sessions and JWT claims
//! from the account record; these DTOs pin the exact field names so a
//! seeded account stays compatible with it.

use serde::Serialize;

use crate::models::Role;

/// Session object shape: `{ user: { id, role, username, firstName?, lastName? } }`.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user: SessionUser,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i32,
    pub role: Role,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// JWT claim shape: `{ role, username, firstName?, lastName? }`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub role: Role,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}
