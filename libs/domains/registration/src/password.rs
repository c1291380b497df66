use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, SaltString},
    Argon2, PasswordVerifier,
};

use crate::error::{RegistrationError, RegistrationResult};

/// Collaborator that turns a submitted credential into a storable hash.
///
/// The workflow treats the credential payload as opaque; hashing lives
/// behind this seam.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> RegistrationResult<String>;
}

/// Argon2 password hashing with a random salt and default parameters.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher;

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> RegistrationResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| RegistrationError::PasswordHash(e.to_string()))
    }
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> RegistrationResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| RegistrationError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
