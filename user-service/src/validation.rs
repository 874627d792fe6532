// Client-side checks applied before a create or update is sent.
// Mirrors what a browser enforces for `required` and `type="email"` inputs;
// uniqueness and length limits are left to the server.

use crate::models::UserDraft;

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// WHATWG "valid e-mail address" production
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("username is required")]
    MissingUsername,

    #[error("email is required")]
    MissingEmail,

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

pub fn validate_draft(draft: &UserDraft) -> Result<(), ValidationError> {
    if draft.username.trim().is_empty() {
        return Err(ValidationError::MissingUsername);
    }
    validate_email(&draft.email)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(is_valid_email("user@localhost"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email("ann"));
        assert!(!is_valid_email("ann@"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("ann@-x.com"));
        assert!(!is_valid_email("ann smith@x.com"));
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            validate_draft(&UserDraft::new("  ", "a@x.com")),
            Err(ValidationError::MissingUsername)
        );
        assert_eq!(
            validate_draft(&UserDraft::new("ann", "")),
            Err(ValidationError::MissingEmail)
        );
        assert_eq!(
            validate_draft(&UserDraft::new("ann", "nope")),
            Err(ValidationError::InvalidEmail("nope".to_string()))
        );
        assert!(validate_draft(&UserDraft::new("ann", "a@x.com")).is_ok());
    }
}
