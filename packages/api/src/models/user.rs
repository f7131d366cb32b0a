//! # User model
//!
//! [`User`] is the account record returned by `POST /users/login` and
//! `GET /users/:id`. It is also what the client persists to restore a session
//! after a reload, so it derives `Serialize + Deserialize + PartialEq`.
//!
//! The backend also sends the password hash; the client never needs it, so
//! the field is not modelled and serde drops it on decode.

use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// An account as seen by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Unlocks AI optimization.
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub created_at: String,
}

impl User {
    /// Get display name, falling back to email if full name is not set.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_drops_password_hash() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 7,
                "email": "jane@example.com",
                "full_name": "Jane Doe",
                "password_hash": "$argon2id$...",
                "is_premium": false,
                "created_at": "2025-03-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.full_name.as_deref(), Some("Jane Doe"));
        assert!(!serde_json::to_string(&user).unwrap().contains("password"));
    }

    #[test]
    fn test_missing_optional_fields() {
        let user: User = serde_json::from_str(r#"{"id": 1, "email": "a@b.c"}"#).unwrap();
        assert!(!user.is_premium);
        assert_eq!(user.full_name, None);
        assert_eq!(user.display_name(), "a@b.c");
    }

    #[test]
    fn test_display_name_skips_blank_full_name() {
        let user = User {
            id: 1,
            email: "a@b.c".into(),
            full_name: Some("  ".into()),
            is_premium: false,
            created_at: String::new(),
        };
        assert_eq!(user.display_name(), "a@b.c");
    }
}
