use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use axum_helpers::ErrorResponse;
use serde::Serialize;
use std::sync::Arc;

use crate::directory::UserDirectory;
use crate::error::RegistrationResult;
use crate::models::RegistrationData;
use crate::password::PasswordHasher;
use crate::workflow::{RegistrationOutcome, RegistrationWorkflow};

/// Create the registration router.
///
/// The single route is registered explicitly here; the app decides where to
/// mount it (e.g. `/api/users`).
pub fn router<D, H>(workflow: RegistrationWorkflow<D, H>) -> Router
where
    D: UserDirectory + 'static,
    H: PasswordHasher + 'static,
{
    Router::new()
        .route("/", post(register_user))
        .with_state(Arc::new(workflow))
}

/// Violation list returned for invalid input, one message per violation,
/// in the order the validator reports them.
#[derive(Debug, Serialize)]
struct ViolationsResponse {
    violations: Vec<String>,
}

/// Register a new user
///
/// POST /users
///
/// Maps workflow outcomes onto transport status codes: 201 for an accepted
/// registration, 400 with the violation list for invalid input (a missing
/// body yields an empty list), 409 for a username conflict. Infrastructure
/// failures surface through `RegistrationError`'s response mapping.
async fn register_user<D, H>(
    State(workflow): State<Arc<RegistrationWorkflow<D, H>>>,
    payload: Option<Json<RegistrationData>>,
) -> RegistrationResult<Response>
where
    D: UserDirectory,
    H: PasswordHasher,
{
    let outcome = workflow
        .register_user(payload.map(|Json(data)| data))
        .await?;

    Ok(match outcome {
        RegistrationOutcome::Accepted(user) => (StatusCode::CREATED, Json(user)).into_response(),
        RegistrationOutcome::InvalidInput(violations) => (
            StatusCode::BAD_REQUEST,
            Json(ViolationsResponse {
                violations: violations.into_iter().map(|v| v.message).collect(),
            }),
        )
            .into_response(),
        RegistrationOutcome::Conflict => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new("conflict", "username is already registered")),
        )
            .into_response(),
    })
}
