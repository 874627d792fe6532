use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned user identifier
pub type UserId = u64;

/// A user record as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Editable fields of this user, used to seed the edit form
    pub fn draft(&self) -> UserDraft {
        UserDraft::new(self.username.clone(), self.email.clone())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ({})", self.username, self.email)
    }
}

/// Body of create and update requests: `{"username", "email"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
}

impl UserDraft {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Acknowledgement returned when bio generation is queued
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioJob {
    pub message: String,
    pub task_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_format() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id": 1, "username": "ann", "email": "a@x.com"}]"#,
        )
        .unwrap();
        assert_eq!(users, vec![User::new(1, "ann", "a@x.com")]);
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let body = serde_json::to_value(UserDraft::new("annie", "a@x.com")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"username": "annie", "email": "a@x.com"})
        );
    }

    #[test]
    fn test_display_matches_list_row() {
        let user = User::new(7, "bob", "bob@example.com");
        assert_eq!(user.to_string(), "bob - (bob@example.com)");
        assert_eq!(user.draft(), UserDraft::new("bob", "bob@example.com"));
    }
}
