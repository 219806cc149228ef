//! Credential logic for a school portal
//!
//! This library provides the password-change policy, a strength score for
//! live feedback, and first-time login routing.
//!
//! # Features
//!
//! - `async` (default): Enables password-change submission against a
//!   [`CredentialStore`], with cancellation and a submit-in-flight guard
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `SCHOOL_USER_DIRECTORY_PATH`: Custom path to the user directory file
//!   (default: `./assets/users.txt`)
//! - `SCHOOL_AUTH_SIMULATED_LATENCY_MS`: Latency of the simulated credential
//!   store (default: 1500)
//!
//! # Example
//!
//! ```rust
//! use school_credentials::{
//!     evaluate_password_strength, route_after_login, validate_password_change, LoginRoute,
//!     PasswordChangeRequest, PasswordField,
//! };
//! use secrecy::SecretString;
//!
//! assert_eq!(route_after_login("Admin"), LoginRoute::ChangePassword);
//!
//! let password = SecretString::new("Abcdefgh1!".to_string().into());
//! let score = evaluate_password_strength(&password);
//! println!("Score: {} ({})", score, score.strength());
//!
//! let request = PasswordChangeRequest::new("demo123", "Abcdefgh1!", "Abcdefgh1?");
//! let result = validate_password_change(&request);
//! assert_eq!(result.error(PasswordField::ConfirmPassword), Some("Passwords do not match"));
//! ```

// Internal modules
#[cfg(feature = "async")]
mod credential;
mod directory;
mod evaluator;
mod login;
mod sections;
mod types;
mod validator;

// Public API
pub use directory::{
    display_name, get_directory_path, init_user_directory, init_user_directory_from_path,
    DirectoryError,
};
pub use evaluator::evaluate_password_strength;
pub use login::{
    is_first_time_login, login_outcome, route_after_login, LoginOutcome, LoginRoute, UserRole,
};
pub use types::{PasswordScore, PasswordStrength};
pub use validator::{
    validate_password_change, PasswordChangeRequest, PasswordField, PasswordPolicyResult,
};

#[cfg(feature = "async")]
pub use credential::{
    submit_password_change_tx, ChangePasswordError, CredentialStore, CredentialStoreError,
    PasswordChangeFlow, SimulatedCredentialStore,
};
