//! Password change submission - hands a validated request to a credential store.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::login::LoginRoute;
use crate::validator::{validate_password_change, PasswordChangeRequest, PasswordPolicyResult};

const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1500;

/// Failures reported by a credential store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialStoreError {
    #[error("The current password is incorrect")]
    IncorrectOldPassword,
    #[error("Password change rejected: {0}")]
    Rejected(String),
    #[error("Credential service unavailable: {0}")]
    Unavailable(String),
}

/// Why a password change did not go through.
#[derive(Error, Debug)]
pub enum ChangePasswordError {
    /// Field errors; shown inline next to each field.
    #[error("Password change request is invalid")]
    Invalid(PasswordPolicyResult),
    #[error("A password change is already being submitted")]
    AlreadySubmitting,
    #[error("Password change cancelled")]
    Cancelled,
    #[error(transparent)]
    Service(#[from] CredentialStoreError),
}

impl ChangePasswordError {
    /// Banner text for failures that are not tied to a single field.
    ///
    /// Returns `None` for [`ChangePasswordError::Invalid`], whose messages
    /// belong to the individual fields.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ChangePasswordError::Invalid(_) => None,
            ChangePasswordError::AlreadySubmitting => {
                Some("Your password is already being updated, please wait".to_string())
            }
            ChangePasswordError::Cancelled => Some("Password update was cancelled".to_string()),
            ChangePasswordError::Service(e) => Some(format!("Could not update password: {}", e)),
        }
    }
}

/// Backend that owns user credentials.
pub trait CredentialStore {
    fn update_password(
        &self,
        username: &str,
        old_password: &SecretString,
        new_password: &SecretString,
    ) -> impl Future<Output = Result<(), CredentialStoreError>> + Send;
}

/// Stand-in store that waits a fixed latency and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedCredentialStore {
    latency: Duration,
}

impl SimulatedCredentialStore {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Reads the latency from `SCHOOL_AUTH_SIMULATED_LATENCY_MS`
    /// (default: 1500 ms). Unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let latency_ms = std::env::var("SCHOOL_AUTH_SIMULATED_LATENCY_MS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_SIMULATED_LATENCY_MS);
        Self::new(Duration::from_millis(latency_ms))
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedCredentialStore {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS))
    }
}

impl CredentialStore for SimulatedCredentialStore {
    async fn update_password(
        &self,
        _username: &str,
        _old_password: &SecretString,
        _new_password: &SecretString,
    ) -> Result<(), CredentialStoreError> {
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

/// Clears the in-flight flag when the submission ends, however it ends.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Change-password submission for one form instance.
///
/// Only one submission may be in flight at a time.
#[derive(Debug)]
pub struct PasswordChangeFlow<S> {
    store: S,
    in_flight: AtomicBool,
}

impl<S: CredentialStore> PasswordChangeFlow<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validates the request and, if valid, updates the password.
    ///
    /// On success the user is routed to the dashboard. The request is only
    /// borrowed so the caller keeps the entered values when this fails.
    pub async fn submit(
        &self,
        username: &str,
        request: &PasswordChangeRequest,
        token: Option<CancellationToken>,
    ) -> Result<LoginRoute, ChangePasswordError> {
        let policy = validate_password_change(request);
        if !policy.is_valid() {
            return Err(ChangePasswordError::Invalid(policy));
        }

        let _guard =
            InFlightGuard::acquire(&self.in_flight).ok_or(ChangePasswordError::AlreadySubmitting)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Submitting password change for {}", username);

        let update =
            self.store
                .update_password(username, &request.old_password, &request.new_password);

        let outcome = match token {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => return Err(ChangePasswordError::Cancelled),
                outcome = update => outcome,
            },
            None => update.await,
        };

        if let Err(_e) = &outcome {
            #[cfg(feature = "tracing")]
            tracing::warn!("Password change for {} failed: {}", username, _e);
        }
        outcome?;

        Ok(LoginRoute::Dashboard)
    }
}

/// Submits a password change and sends the outcome via channel.
pub async fn submit_password_change_tx<S: CredentialStore>(
    flow: &PasswordChangeFlow<S>,
    username: &str,
    request: &PasswordChangeRequest,
    token: CancellationToken,
    tx: mpsc::Sender<Result<LoginRoute, ChangePasswordError>>,
) {
    let outcome = flow.submit(username, request, Some(token)).await;

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password change outcome: {}", _e);
    }
}
