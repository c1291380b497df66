use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_helpers::ErrorResponse;
use thiserror::Error;

/// Failures raised by a user directory.
///
/// `AlreadyExists` is the distinguishable failure of the atomic `create`
/// contract; the workflow maps it to a conflict outcome. `Unavailable` is an
/// infrastructure failure and is never converted into a business outcome.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("user '{0}' already exists")]
    AlreadyExists(String),

    #[error("user directory unavailable: {0}")]
    Unavailable(String),
}

/// Infrastructure failures surfaced by the registration workflow.
///
/// Business outcomes (invalid input, conflict) are not errors; they live in
/// [`crate::workflow::RegistrationOutcome`].
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("user directory failure: {0}")]
    Directory(#[from] DirectoryError),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            // Leaked conflict from the atomic create contract; the workflow
            // normally intercepts this before it reaches the error channel.
            RegistrationError::Directory(DirectoryError::AlreadyExists(username)) => (
                StatusCode::CONFLICT,
                "conflict",
                format!("user '{}' already exists", username),
            ),
            RegistrationError::Directory(DirectoryError::Unavailable(msg)) => {
                tracing::error!("User directory unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "service_unavailable",
                    "User directory is unavailable".to_string(),
                )
            }
            RegistrationError::PasswordHash(msg) => {
                tracing::error!("Password hash error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(error_type, message))).into_response()
    }
}
