//! Session roles and authentication payloads.

use serde::{Deserialize, Serialize};

/// The two portal roles. Exactly one bearer token may be stored per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Clinic,
}

impl Role {
    /// Lookup order for [`crate::store::Database::stored_token`]: patient
    /// first, then clinic. Callers must not infer the role from a token
    /// returned by that call.
    pub const ALL: [Role; 2] = [Role::Patient, Role::Clinic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Clinic => "clinic",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session returned by the backend on login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// Opaque bearer token
    pub token: String,
    /// Backend user id
    #[serde(rename = "_id", alias = "id", default)]
    pub user_id: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
}

/// Patient registration payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Patient).unwrap(), "\"patient\"");
        assert_eq!(serde_json::to_string(&Role::Clinic).unwrap(), "\"clinic\"");
    }

    #[test]
    fn test_auth_session_accepts_mongo_id() {
        let session: AuthSession =
            serde_json::from_str(r#"{"token":"t1","_id":"u1","name":"Ada"}"#).unwrap();
        assert_eq!(session.token, "t1");
        assert_eq!(session.user_id.as_deref(), Some("u1"));
    }
}
