use domain_registration::{ConstraintViolation, RegistrationData, User, UserResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the registration API, served by Swagger UI.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "registration-api",
        description = "User account registration service"
    ),
    components(schemas(RegistrationData, User, UserResponse, ConstraintViolation))
)]
pub struct ApiDoc;
