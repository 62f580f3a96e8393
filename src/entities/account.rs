use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Driver,
    User,
}

/// A registered account. Field names serialize camelCase so the blobs stay
/// readable by the mobile app that originally wrote them.
///
/// Passwords are stored and compared in plaintext, matching the source
/// application. Not production-appropriate; kept deliberately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
        role: Role,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
            phone: phone.map(str::to_string),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_serializes_with_mobile_app_field_names() {
        let account = Account::new("Asha", "asha@bustrack.com", "pw", Some("555"), Role::Driver);
        let json = serde_json::to_string(&account).unwrap();

        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"role\":\"driver\""));
        assert!(json.contains("\"phone\":\"555\""));
    }

    #[test]
    fn role_strings_match_blob_format() {
        assert_eq!(
            serde_json::to_string(&Role::SuperAdmin).unwrap(),
            "\"super_admin\""
        );
        assert_eq!(
            serde_json::from_str::<Role>("\"user\"").unwrap(),
            Role::User
        );
    }
}
