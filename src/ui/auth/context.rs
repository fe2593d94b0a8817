//! Auth context for managing user authentication state
//!
//! This module provides a reactive authentication context that:
//! - Stores the current identity
//! - Handles login, logout, registration and password recovery flows
//! - Restores the session from the server after hydration
//!
//! The session itself lives in an HttpOnly cookie set by `/api/auth/*`.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};

pub use crate::core::auth::{AuthState, Identity};
use crate::core::forms::{FieldErrors, RegistrationForm};

/// Error code of a registration whose follow-up login failed
pub const REGISTERED_LOGIN_FAILED: &str = "REGISTERED_LOGIN_FAILED";

/// Failure reported by the auth API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthFailure {
    pub error: String,
    pub code: String,
    #[serde(default)]
    pub fields: Option<FieldErrors>,
}

impl AuthFailure {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NETWORK_ERROR".to_string(),
            fields: None,
        }
    }

    /// The account exists; the user should sign in instead of retrying
    pub fn is_registered_login_failed(&self) -> bool {
        self.code == REGISTERED_LOGIN_FAILED
    }
}

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
    /// Held for the whole login chain
    pub loading: RwSignal<bool>,
    /// Error from last operation
    pub error: RwSignal<Option<AuthFailure>>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), AuthState::Authenticated(_))
    }

    /// Get current user (if authenticated)
    pub fn user(&self) -> Option<Identity> {
        match self.state.get() {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start with Loading on both server and client to avoid hydration mismatch
    let state = RwSignal::new(AuthState::Loading);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<AuthFailure>);

    let ctx = AuthContext {
        state,
        loading,
        error,
    };

    // Ask the server who the session belongs to (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            spawn_local(async move {
                match fetch_current_user().await {
                    Ok(user) => state.set(AuthState::Authenticated(user)),
                    Err(_) => state.set(AuthState::Unauthenticated),
                }
            });
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct RecoveryRequest<'a> {
    email: &'a str,
}

/// Auth API response
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct AuthResponse {
    user: Identity,
}

/// POST a JSON body and decode either the success type or an `AuthFailure`
#[cfg(not(feature = "ssr"))]
async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, AuthFailure> {
    use gloo_net::http::Request;

    let response = Request::post(url)
        .json(body)
        .map_err(|e| AuthFailure::network(e.to_string()))?
        .send()
        .await
        .map_err(|_| AuthFailure::network("Network error. Please try again."))?;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| AuthFailure::network(e.to_string()))
    } else {
        Err(response
            .json::<AuthFailure>()
            .await
            .unwrap_or_else(|_| AuthFailure::network(format!("Request failed ({})", response.status()))))
    }
}

/// Run an auth call with the loading flag held, recording its outcome
#[cfg(not(feature = "ssr"))]
async fn run_session_call<F>(future: F) -> Result<Identity, AuthFailure>
where
    F: std::future::Future<Output = Result<AuthResponse, AuthFailure>>,
{
    let ctx = use_auth_context();
    ctx.loading.set(true);
    ctx.error.set(None);

    let result = future.await.map(|resp| resp.user);

    match &result {
        Ok(user) => ctx.state.set(AuthState::Authenticated(user.clone())),
        Err(failure) => {
            ctx.state.set(AuthState::Unauthenticated);
            ctx.error.set(Some(failure.clone()));
        }
    }
    ctx.loading.set(false);

    result
}

/// Login with email and password
#[cfg(not(feature = "ssr"))]
pub async fn login(email: &str, password: &str) -> Result<Identity, AuthFailure> {
    let request = LoginRequest { email, password };
    run_session_call(post_json("/api/auth/login", &request)).await
}

#[cfg(feature = "ssr")]
pub async fn login(_email: &str, _password: &str) -> Result<Identity, AuthFailure> {
    Err(AuthFailure::network("Login not available on server"))
}

/// Register a new account and sign into it
#[cfg(not(feature = "ssr"))]
pub async fn register(form: &RegistrationForm) -> Result<Identity, AuthFailure> {
    run_session_call(post_json("/api/auth/register", form)).await
}

#[cfg(feature = "ssr")]
pub async fn register(_form: &RegistrationForm) -> Result<Identity, AuthFailure> {
    Err(AuthFailure::network("Register not available on server"))
}

/// Logout the current user
#[cfg(not(feature = "ssr"))]
pub async fn logout() -> Result<(), AuthFailure> {
    let ctx = use_auth_context();

    let result = post_json::<_, serde_json::Value>("/api/auth/logout", &()).await;
    match result {
        Ok(_) => {
            ctx.state.set(AuthState::Unauthenticated);
            Ok(())
        }
        Err(failure) => {
            ctx.error.set(Some(failure.clone()));
            Err(failure)
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn logout() -> Result<(), AuthFailure> {
    Ok(())
}

/// Send a password recovery email
#[cfg(not(feature = "ssr"))]
pub async fn reset_password(email: &str) -> Result<(), AuthFailure> {
    post_json::<_, serde_json::Value>("/api/auth/recovery", &RecoveryRequest { email })
        .await
        .map(|_| ())
}

#[cfg(feature = "ssr")]
pub async fn reset_password(_email: &str) -> Result<(), AuthFailure> {
    Err(AuthFailure::network("Recovery not available on server"))
}

/// Fetch current user info
#[cfg(not(feature = "ssr"))]
async fn fetch_current_user() -> Result<Identity, AuthFailure> {
    use gloo_net::http::Request;

    let response = Request::get("/api/auth/me")
        .send()
        .await
        .map_err(|e| AuthFailure::network(e.to_string()))?;

    if !response.ok() {
        return Err(AuthFailure::network("Not authenticated"));
    }

    response
        .json::<Identity>()
        .await
        .map_err(|e| AuthFailure::network(e.to_string()))
}
