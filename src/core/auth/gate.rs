//! Session gate
//!
//! Owns the identity of one session and sequences the provider calls for
//! login, registration, logout and password recovery. The gate is an explicit
//! value: it is created when a session starts and dropped when it ends.

use serde::{Deserialize, Serialize};

use super::provider::{Identity, IdentityProvider, ProviderError};
use crate::core::forms::{FormError, RegistrationForm};

/// Shown when an account was created but the follow-up login failed
pub const REGISTERED_LOGIN_FAILED_MESSAGE: &str =
    "Registration successful, but login failed. Please try logging in manually.";

/// Authentication state of a session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AuthState {
    /// Not resolved yet
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(Identity),
}

impl AuthState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

/// Session gate error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(#[from] FormError),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid credentials. Please check the email and password.")]
    InvalidCredentials,

    #[error("An account with this email already exists")]
    AccountExists,

    /// Account creation succeeded, the automatic login did not
    #[error("{}", REGISTERED_LOGIN_FAILED_MESSAGE)]
    RegisteredButLoginFailed { login_error: Box<AuthError> },

    #[error("{0}")]
    Platform(String),
}

impl From<ProviderError> for AuthError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unauthorized => AuthError::NotAuthenticated,
            ProviderError::Conflict => AuthError::AccountExists,
            ProviderError::Rejected { status: 401, .. } => AuthError::InvalidCredentials,
            other => AuthError::Platform(other.to_string()),
        }
    }
}

/// Session gate over an identity provider
pub struct SessionGate<P> {
    provider: P,
    state: AuthState,
    loading: bool,
}

impl<P: IdentityProvider> SessionGate<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: AuthState::Loading,
            loading: false,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&Identity> {
        self.state.identity()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// True while a login chain is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Resolve the identity of an existing session.
    pub async fn restore(&mut self) -> Option<&Identity> {
        self.state = match self.provider.get_current_user().await {
            Ok(identity) => AuthState::Authenticated(identity),
            Err(_) => AuthState::Unauthenticated,
        };
        self.state.identity()
    }

    /// Create a session, then fetch the identity it belongs to.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.loading = true;
        let result = self.login_chain(email, password).await;
        self.loading = false;

        match &result {
            Ok(identity) => self.state = AuthState::Authenticated(identity.clone()),
            Err(_) => self.state = AuthState::Unauthenticated,
        }
        result
    }

    async fn login_chain(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.provider.create_session(email, password).await?;
        let identity = self.provider.get_current_user().await?;
        Ok(identity)
    }

    /// Create an account and log straight into it.
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Identity, AuthError> {
        if let Err(err) = self.provider.create_account(email, password, name).await {
            self.state = AuthState::Unauthenticated;
            return Err(err.into());
        }

        self.login(email, password)
            .await
            .map_err(|login_error| AuthError::RegisteredButLoginFailed {
                login_error: Box::new(login_error),
            })
    }

    /// Validate a registration form and register on success.
    ///
    /// Invalid forms never reach the provider.
    pub async fn submit_registration(
        &mut self,
        form: &RegistrationForm,
    ) -> Result<Identity, AuthError> {
        let request = form.validate()?;
        self.register(&request.email, &request.password, &request.name)
            .await
    }

    /// End the current session. On failure the session is left as it was.
    pub async fn logout(&mut self) -> Result<(), AuthError> {
        self.provider.delete_session().await?;
        self.state = AuthState::Unauthenticated;
        Ok(())
    }

    /// Ask the provider to email a recovery link.
    pub async fn reset_password(&self, email: &str, redirect_url: &str) -> Result<(), AuthError> {
        self.provider
            .create_password_recovery(email, redirect_url)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::testing::MockProvider;

    #[tokio::test]
    async fn test_new_gate_is_loading() {
        let gate = SessionGate::new(MockProvider::new());
        assert_eq!(gate.state(), &AuthState::Loading);
        assert!(!gate.is_loading());
    }

    #[tokio::test]
    async fn test_restore_without_session() {
        let mut gate = SessionGate::new(MockProvider::new());
        assert!(gate.restore().await.is_none());
        assert_eq!(gate.state(), &AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_restore_with_session() {
        let provider = MockProvider::new().with_account("a@example.com", "Passw0rd!", "alice");
        provider.force_session("a@example.com");
        let mut gate = SessionGate::new(provider);

        let identity = gate.restore().await.unwrap();
        assert_eq!(identity.email, "a@example.com");
    }

    #[tokio::test]
    async fn test_login_success() {
        let provider = MockProvider::new().with_account("a@example.com", "Passw0rd!", "alice");
        let mut gate = SessionGate::new(provider);

        let identity = gate.login("a@example.com", "Passw0rd!").await.unwrap();
        assert_eq!(identity.name, "alice");
        assert!(gate.is_authenticated());
        assert!(!gate.is_loading());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let provider = MockProvider::new().with_account("a@example.com", "Passw0rd!", "alice");
        let mut gate = SessionGate::new(provider);

        let err = gate.login("a@example.com", "nope").await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(gate.state(), &AuthState::Unauthenticated);
        assert!(!gate.is_loading());
    }

    #[tokio::test]
    async fn test_identity_not_fetched_when_session_fails() {
        let provider = MockProvider::new();
        let mut gate = SessionGate::new(provider);

        let _ = gate.login("ghost@example.com", "x").await;
        assert_eq!(gate.provider().calls("get_current_user"), 0);
    }

    #[tokio::test]
    async fn test_register_existing_account() {
        let provider = MockProvider::new().with_account("a@example.com", "Passw0rd!", "alice");
        let mut gate = SessionGate::new(provider);

        let err = gate
            .register("a@example.com", "Passw0rd!", "alice2")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::AccountExists);
        assert_eq!(gate.provider().calls("create_session"), 0);
    }

    #[tokio::test]
    async fn test_logout_clears_identity() {
        let provider = MockProvider::new().with_account("a@example.com", "Passw0rd!", "alice");
        let mut gate = SessionGate::new(provider);
        gate.login("a@example.com", "Passw0rd!").await.unwrap();

        gate.logout().await.unwrap();
        assert_eq!(gate.state(), &AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_failed_logout_keeps_identity() {
        let provider = MockProvider::new().with_account("a@example.com", "Passw0rd!", "alice");
        let mut gate = SessionGate::new(provider);
        gate.login("a@example.com", "Passw0rd!").await.unwrap();
        gate.provider().fail_next("delete_session");

        assert!(gate.logout().await.is_err());
        assert!(gate.is_authenticated());
    }

    #[tokio::test]
    async fn test_reset_password_passes_redirect() {
        let provider = MockProvider::new().with_account("a@example.com", "Passw0rd!", "alice");
        let gate = SessionGate::new(provider);

        gate.reset_password("a@example.com", "https://drawtab.app/auth/reset-password")
            .await
            .unwrap();
        assert_eq!(
            gate.provider().recovery_requests(),
            vec![(
                "a@example.com".to_string(),
                "https://drawtab.app/auth/reset-password".to_string()
            )]
        );
    }

    #[test]
    fn test_provider_error_mapping() {
        assert_eq!(
            AuthError::from(ProviderError::Unauthorized),
            AuthError::NotAuthenticated
        );
        assert_eq!(
            AuthError::from(ProviderError::Rejected {
                status: 401,
                message: "Invalid credentials".into()
            }),
            AuthError::InvalidCredentials
        );
        assert!(matches!(
            AuthError::from(ProviderError::Transport("timeout".into())),
            AuthError::Platform(_)
        ));
    }

    #[test]
    fn test_composed_error_message() {
        let err = AuthError::RegisteredButLoginFailed {
            login_error: Box::new(AuthError::InvalidCredentials),
        };
        assert_eq!(err.to_string(), REGISTERED_LOGIN_FAILED_MESSAGE);
    }
}
