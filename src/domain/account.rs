//! Account model and roles.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Standard,
    Administrator,
}

impl Role {
    /// Stored name. Renaming these is a breaking schema change.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Administrator => "ADMINISTRATOR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "STANDARD" => Some(Self::Standard),
            "ADMINISTRATOR" => Some(Self::Administrator),
            _ => None,
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Standard, Self::Administrator]
    }
}

/// A registered user. `credential` is stored as plain text — demo fidelity,
/// not an endorsement; callers must not treat this store as secure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub first: String,
    pub last: String,
    pub email: String,
    pub credential: String,
    pub role: Role,
}

/// Canonical form for stored emails: trimmed, lowercased.
///
/// Applied at the boundary (registration / login forms) before calling into
/// the repository; lookups are exact matches against this form.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for r in Role::all() {
            assert_eq!(Role::parse(r.as_str()), Some(*r));
        }
    }

    #[test]
    fn role_parse_rejects_unknown() {
        assert_eq!(Role::parse("ADMIN"), None);
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Jane.Doe@Mavs.EDU "), "jane.doe@mavs.edu");
    }
}
