use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Registration data submitted by the caller.
///
/// Transient and request-scoped; it carries no identity until persisted.
/// The per-field constraints are declared here as `validator` attributes,
/// never in workflow logic.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegistrationData {
    /// Unique account identifier, immutable once registered
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    /// Credential payload, opaque to the workflow (hashed before persistence)
    #[validate(custom(function = "validate_password"))]
    pub password: String,
    /// Optional display name
    #[validate(length(max = 100, message = "display name must not exceed 100 characters"))]
    pub display_name: Option<String>,
    /// Optional contact address
    #[validate(email(message = "email must be a well-formed address"))]
    pub email: Option<String>,
}

fn constraint_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(constraint_error("required", "username is required"));
    }
    if username.chars().count() > 64 {
        return Err(constraint_error(
            "length",
            "username must not exceed 64 characters",
        ));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(constraint_error("required", "password is required"));
    }
    if password.chars().count() > 256 {
        return Err(constraint_error(
            "length",
            "password must not exceed 256 characters",
        ));
    }
    Ok(())
}

/// A single failed validation rule: the offending field and a message
/// suitable for direct display to an API consumer.
///
/// The `Ord` impl (field, then message) gives violation lists a stable
/// rendering order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
pub struct ConstraintViolation {
    pub field: String,
    pub message: String,
}

/// Registered user entity, owned by the user directory.
///
/// Keyed by `username`; created exactly once and never mutated by the
/// registration core.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Account name (unique, immutable)
    pub username: String,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name
    pub display_name: Option<String>,
    /// Contact address
    pub email: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user (password must already be hashed)
    pub fn new(
        username: String,
        password_hash: String,
        display_name: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            username,
            password_hash,
            display_name,
            email,
            created_at: Utc::now(),
        }
    }
}

/// User response DTO (without password_hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_omits_password_hash() {
        let user = User::new(
            "alice".to_string(),
            "hashed".to_string(),
            Some("Alice".to_string()),
            None,
        );

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }

    #[test]
    fn test_violation_ordering_is_by_field_then_message() {
        let mut violations = vec![
            ConstraintViolation {
                field: "username".to_string(),
                message: "username is required".to_string(),
            },
            ConstraintViolation {
                field: "password".to_string(),
                message: "password is required".to_string(),
            },
        ];
        violations.sort();
        assert_eq!(violations[0].field, "password");
        assert_eq!(violations[1].field, "username");
    }
}
