//! Wire/storage types for the managed-content records.
//!
//! Only records that cross a seam live here; the seed templates are inline
//! SQL and stay in `infra`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed key of the contact-info singleton row.
pub const CONTACT_INFO_ID: &str = "contact-info";

/// User roles, stored as TEXT. `Admin` and `SuperAdmin` may manage settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "SUPER_ADMIN")]
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
            Role::SuperAdmin => "SUPER_ADMIN",
        }
    }

    pub fn can_manage_settings(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            "SUPER_ADMIN" => Ok(Role::SuperAdmin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Menu placement, stored as TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLocation {
    Header,
    Footer,
}

impl MenuLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuLocation::Header => "HEADER",
            MenuLocation::Footer => "FOOTER",
        }
    }
}

/// The contact-info singleton as stored and served. Every field other than
/// the fixed id is nullable; a lazily created row carries only the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub id: String,
    pub title_fr: Option<String>,
    pub title_en: Option<String>,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub phone2: Option<String>,
    pub working_hours_fr: Option<String>,
    pub working_hours_en: Option<String>,
    pub map_embed_url: Option<String>,
}

impl ContactInfo {
    /// The lazily-created default: just the fixed id, everything else unset.
    pub fn empty() -> Self {
        Self {
            id: CONTACT_INFO_ID.to_string(),
            title_fr: None,
            title_en: None,
            description_fr: None,
            description_en: None,
            address: None,
            email: None,
            phone: None,
            phone2: None,
            working_hours_fr: None,
            working_hours_en: None,
            map_embed_url: None,
        }
    }
}

/// Allow-listed update payload for the contact-info record.
///
/// Unknown keys are rejected at deserialization instead of being written
/// through to storage. Absent fields are left untouched by the merge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactInfoPatch {
    pub title_fr: Option<String>,
    pub title_en: Option<String>,
    pub description_fr: Option<String>,
    pub description_en: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub phone2: Option<String>,
    pub working_hours_fr: Option<String>,
    pub working_hours_en: Option<String>,
    pub map_embed_url: Option<String>,
}

impl ContactInfoPatch {
    pub fn is_empty(&self) -> bool {
        self.title_fr.is_none()
            && self.title_en.is_none()
            && self.description_fr.is_none()
            && self.description_en.is_none()
            && self.address.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.phone2.is_none()
            && self.working_hours_fr.is_none()
            && self.working_hours_en.is_none()
            && self.map_embed_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_roundtrip() {
        for r in [Role::User, Role::Admin, Role::SuperAdmin] {
            assert_eq!(r.as_str().parse::<Role>().unwrap(), r);
        }
        assert!("OPERATOR".parse::<Role>().is_err());
    }

    #[test]
    fn only_privileged_roles_manage_settings() {
        assert!(!Role::User.can_manage_settings());
        assert!(Role::Admin.can_manage_settings());
        assert!(Role::SuperAdmin.can_manage_settings());
    }

    #[test]
    fn patch_accepts_partial_camel_case_payload() {
        let p: ContactInfoPatch =
            serde_json::from_str(r#"{ "email": "new@example.org" }"#).unwrap();
        assert_eq!(p.email.as_deref(), Some("new@example.org"));
        assert!(p.title_fr.is_none());
        assert!(!p.is_empty());
    }

    #[test]
    fn patch_rejects_unknown_keys() {
        let res = serde_json::from_str::<ContactInfoPatch>(
            r#"{ "email": "x@y.z", "isAdmin": true }"#,
        );
        assert!(res.is_err(), "unknown keys must not be written through");
    }

    #[test]
    fn empty_record_serializes_with_fixed_id_and_nulls() {
        let v = serde_json::to_value(ContactInfo::empty()).unwrap();
        assert_eq!(v["id"], CONTACT_INFO_ID);
        assert!(v["titleFr"].is_null());
        assert!(v["mapEmbedUrl"].is_null());
    }
}
