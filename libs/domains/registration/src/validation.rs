//! Explicit constraint evaluation.
//!
//! The workflow calls [`validate`] as a plain function rather than relying on
//! extractor-level validation, so the complete violation list is available to
//! the caller in one pass.

use crate::models::{ConstraintViolation, RegistrationData};
use validator::Validate;

/// Evaluates every declared constraint on `data` and returns the complete
/// list of violations.
///
/// Does not short-circuit on the first failure. An empty vec signals valid
/// input. Violations are sorted by field name (then message) so the rendering
/// order is deterministic. Purely a function of its input and the static
/// constraint declarations on [`RegistrationData`].
pub fn validate(data: &RegistrationData) -> Vec<ConstraintViolation> {
    let Err(errors) = data.validate() else {
        return Vec::new();
    };

    let mut violations: Vec<ConstraintViolation> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| ConstraintViolation {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field)),
            })
        })
        .collect();

    violations.sort();
    violations
}
