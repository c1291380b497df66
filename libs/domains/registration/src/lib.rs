//! Registration Domain
//!
//! Registers new user accounts: input validation, uniqueness enforcement,
//! and the decision logic that maps workflow outcomes onto distinct result
//! states.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoint, outcome → status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Workflow   │  ← validate → uniqueness check → create
//! └──────┬──────┘
//!        │
//! ┌──────▼──────────────┐
//! │ Directory / Hasher  │  ← external collaborators (traits)
//! └──────┬──────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← entities, DTOs, constraint declarations
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_registration::{
//!     handlers,
//!     directory::InMemoryUserDirectory,
//!     password::Argon2PasswordHasher,
//!     workflow::RegistrationWorkflow,
//! };
//!
//! let directory = InMemoryUserDirectory::new();
//! let workflow = RegistrationWorkflow::new(directory, Argon2PasswordHasher);
//!
//! // Create Axum router
//! let router = handlers::router(workflow);
//! ```

pub mod directory;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod validation;
pub mod workflow;

// Re-export commonly used types
pub use directory::{InMemoryUserDirectory, UserDirectory};
pub use error::{DirectoryError, RegistrationError, RegistrationResult};
pub use models::{ConstraintViolation, RegistrationData, User, UserResponse};
pub use password::{Argon2PasswordHasher, PasswordHasher};
pub use workflow::{RegistrationOutcome, RegistrationWorkflow};
