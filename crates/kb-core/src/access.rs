//! Administrative access policy.
//!
//! Admin levels are ordered `suporte < admin < master`. The level lives on
//! the profile document; the check lives here, apart from the onboarding
//! snapshot, so onboarding rules stay independent of staff permissions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Staff permission level.
///
/// Variants are declared from lowest to highest so the derived `Ord`
/// encodes the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminLevel {
    Suporte,
    Admin,
    Master,
}

impl AdminLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminLevel::Suporte => "suporte",
            AdminLevel::Admin => "admin",
            AdminLevel::Master => "master",
        }
    }
}

impl fmt::Display for AdminLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown admin level: {0}")]
pub struct ParseAdminLevelError(pub String);

impl FromStr for AdminLevel {
    type Err = ParseAdminLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "suporte" => Ok(AdminLevel::Suporte),
            "admin" => Ok(AdminLevel::Admin),
            "master" => Ok(AdminLevel::Master),
            other => Err(ParseAdminLevelError(other.to_string())),
        }
    }
}

/// Access requirements of one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    /// Minimum admin level, `None` for pages open to every onboarded user.
    pub min_admin_level: Option<AdminLevel>,
}

impl AccessPolicy {
    /// Policy of a regular page: any user with a complete profile.
    pub fn onboarded() -> Self {
        Self::default()
    }

    pub fn admin(min_level: AdminLevel) -> Self {
        Self {
            min_admin_level: Some(min_level),
        }
    }

    /// An absent user level never satisfies an admin requirement.
    pub fn permits(&self, user_level: Option<AdminLevel>) -> bool {
        match self.min_admin_level {
            None => true,
            Some(required) => user_level.is_some_and(|level| level >= required),
        }
    }
}
