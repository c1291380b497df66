use std::sync::Arc;

use crate::directory::UserDirectory;
use crate::error::{DirectoryError, RegistrationResult};
use crate::models::{ConstraintViolation, RegistrationData, User, UserResponse};
use crate::password::PasswordHasher;
use crate::validation;

/// The closed set of business outcomes of a registration attempt.
///
/// Infrastructure failures are not outcomes; they propagate through the
/// `Result` error channel as [`crate::error::RegistrationError`].
#[derive(Debug)]
pub enum RegistrationOutcome {
    /// User successfully created
    Accepted(UserResponse),
    /// Input was absent (empty list) or failed validation (complete list,
    /// in validator order)
    InvalidInput(Vec<ConstraintViolation>),
    /// A user with the given username already exists
    Conflict,
}

/// Orchestrates the registration sequence: validate, check uniqueness,
/// create.
///
/// Stateless between invocations; the only shared mutable resource is the
/// user directory. Collaborators are supplied at construction time.
pub struct RegistrationWorkflow<D: UserDirectory, H: PasswordHasher> {
    directory: Arc<D>,
    hasher: Arc<H>,
}

impl<D: UserDirectory, H: PasswordHasher> RegistrationWorkflow<D, H> {
    pub fn new(directory: D, hasher: H) -> Self {
        Self {
            directory: Arc::new(directory),
            hasher: Arc::new(hasher),
        }
    }

    /// Register a new user account from submitted registration data.
    ///
    /// Sequential, no retries, no partial commits:
    /// 1. Absent input is rejected without consulting the validator or the
    ///    directory; no constraint evaluation is possible, so the violation
    ///    list is empty.
    /// 2. Validation failures carry the complete violation list.
    /// 3. An existing username yields [`RegistrationOutcome::Conflict`].
    /// 4. Otherwise the password is hashed and creation is delegated to the
    ///    directory.
    ///
    /// Uniqueness is ultimately enforced by the directory's atomic `create`:
    /// if a concurrent registration wins between steps 3 and 4, the
    /// resulting `AlreadyExists` failure is reported as a conflict, not an
    /// error. The advisory `exists` pre-check keeps the common sequential
    /// duplicate from paying for a password hash.
    pub async fn register_user(
        &self,
        data: Option<RegistrationData>,
    ) -> RegistrationResult<RegistrationOutcome> {
        let Some(data) = data else {
            return Ok(RegistrationOutcome::InvalidInput(Vec::new()));
        };

        let violations = validation::validate(&data);
        if !violations.is_empty() {
            return Ok(RegistrationOutcome::InvalidInput(violations));
        }

        if self.directory.exists(&data.username).await? {
            return Ok(RegistrationOutcome::Conflict);
        }

        let password_hash = self.hasher.hash(&data.password)?;
        let user = User::new(data.username, password_hash, data.display_name, data.email);

        match self.directory.create(user).await {
            Ok(created) => {
                tracing::info!(username = %created.username, "Registered user");
                Ok(RegistrationOutcome::Accepted(created.into()))
            }
            // Lost the race between the existence check and create
            Err(DirectoryError::AlreadyExists(_)) => Ok(RegistrationOutcome::Conflict),
            Err(e) => Err(e.into()),
        }
    }
}
