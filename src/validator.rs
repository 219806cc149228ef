//! Password change validator - old/new/confirm policy checks.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::evaluate_password_strength;
use crate::sections::NEW_PASSWORD_SECTIONS;
use crate::types::PasswordScore;

/// Fields of the change-password form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordField {
    OldPassword,
    NewPassword,
    ConfirmPassword,
}

impl PasswordField {
    /// Form key the error is attached to.
    pub fn key(&self) -> &'static str {
        match self {
            PasswordField::OldPassword => "oldPassword",
            PasswordField::NewPassword => "newPassword",
            PasswordField::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for PasswordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One submission attempt of the change-password form.
#[derive(Debug)]
pub struct PasswordChangeRequest {
    pub old_password: SecretString,
    pub new_password: SecretString,
    pub confirm_password: SecretString,
}

impl PasswordChangeRequest {
    pub fn new(
        old_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            old_password: SecretString::new(old_password.into().into()),
            new_password: SecretString::new(new_password.into().into()),
            confirm_password: SecretString::new(confirm_password.into().into()),
        }
    }
}

/// Outcome of validating a [`PasswordChangeRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicyResult {
    /// Strength of the new password, independent of the other fields.
    pub strength: PasswordScore,
    /// At most one message per field.
    pub errors: BTreeMap<PasswordField, String>,
}

impl PasswordPolicyResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: PasswordField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// Validates an old/new/confirm password triple.
///
/// Each field reports only its first failing rule. The new password runs
/// through the policy sections in order (length, lowercase, uppercase, digit,
/// symbol). The confirmation is compared to the new password regardless of
/// whether the new password passed the policy.
pub fn validate_password_change(request: &PasswordChangeRequest) -> PasswordPolicyResult {
    let mut errors = BTreeMap::new();

    let old = request.old_password.expose_secret();
    let new = request.new_password.expose_secret();
    let confirm = request.confirm_password.expose_secret();

    if old.is_empty() {
        errors.insert(
            PasswordField::OldPassword,
            "Old password is required".to_string(),
        );
    }

    for (_section_name, section_fn) in NEW_PASSWORD_SECTIONS {
        if let Some(reason) = section_fn(new) {
            #[cfg(feature = "tracing")]
            tracing::debug!("New password failed policy section: {}", _section_name);
            errors.insert(PasswordField::NewPassword, reason.to_string());
            break;
        }
    }

    if new != confirm {
        errors.insert(
            PasswordField::ConfirmPassword,
            "Passwords do not match".to_string(),
        );
    }

    PasswordPolicyResult {
        strength: evaluate_password_strength(&request.new_password),
        errors,
    }
}
