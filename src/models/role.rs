//! Account roles as stored in the user table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Role assigned to an account. `Directeur` is the highest-privilege role
/// and the one the provisioner seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Directeur,
    Enseignant,
    Secretaire,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Directeur => "DIRECTEUR",
            Self::Enseignant => "ENSEIGNANT",
            Self::Secretaire => "SECRETAIRE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown role '{0}' (expected DIRECTEUR, ENSEIGNANT or SECRETAIRE)")]
pub struct ParseRoleError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DIRECTEUR" => Ok(Self::Directeur),
            "ENSEIGNANT" => Ok(Self::Enseignant),
            "SECRETAIRE" => Ok(Self::Secretaire),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}
