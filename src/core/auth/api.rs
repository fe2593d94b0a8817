//! Auth API endpoints
//!
//! Provides REST API endpoints backed by the platform account service:
//! - GET /api/auth/me - Get current user info
//! - POST /api/auth/login - Create a session
//! - POST /api/auth/register - Create an account and log into it
//! - POST /api/auth/logout - Delete the current session
//! - POST /api/auth/recovery - Send a password recovery email
//!
//! The platform session secret travels in an HttpOnly cookie.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::auth::{AuthError, Identity, SessionGate};
use crate::core::forms::{FieldErrors, LoginRequest, RegistrationForm};
use crate::core::platform::{Platform, PlatformAccount};

/// Cookie holding the platform session secret
pub const SESSION_COOKIE: &str = "drawtab_session";

/// Auth API state containing the platform handles
#[derive(Clone)]
pub struct AuthApiState {
    pub platform: Platform,
    /// Mark the session cookie `Secure`
    pub secure_cookies: bool,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            fields: None,
        }
    }
}

impl AuthError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::Validation(_) => "VALIDATION_FAILED",
            AuthError::NotAuthenticated => "NOT_AUTHENTICATED",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::AccountExists => "ACCOUNT_EXISTS",
            AuthError::RegisteredButLoginFailed { .. } => "REGISTERED_LOGIN_FAILED",
            AuthError::Platform(_) => "PLATFORM_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::NotAuthenticated | AuthError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::AccountExists => StatusCode::CONFLICT,
            AuthError::RegisteredButLoginFailed { .. } => StatusCode::UNAUTHORIZED,
            AuthError::Platform(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Convert AuthError to API response
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let mut body = ApiError::new(self.to_string(), self.code());
        if let AuthError::Validation(form_error) = &self {
            body.fields = form_error.field_errors().cloned();
        }

        (self.status(), Json(body)).into_response()
    }
}

/// Response wrapper for successful login/registration
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthApiResponse {
    pub user: Identity,
}

/// Request for a recovery email
#[derive(Debug, Deserialize)]
pub struct RecoveryRequest {
    pub email: String,
}

/// Generic success response
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

/// Create the auth API router
pub fn auth_api_router(state: AuthApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/auth/me", get(me_handler))
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/auth/recovery", post(recovery_handler))
        .with_state(state)
}

/// Gate bound to the session carried by the request cookies
fn gate_for(state: &AuthApiState, jar: &CookieJar) -> SessionGate<PlatformAccount> {
    let secret = jar.get(SESSION_COOKIE).map(|c| c.value().to_string());
    SessionGate::new(state.platform.account(secret))
}

fn session_cookie(secret: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, secret))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

/// Store the gate's session secret, if the platform returned one
fn with_session(
    jar: CookieJar,
    gate: &SessionGate<PlatformAccount>,
    secure: bool,
) -> CookieJar {
    match gate.provider().session_secret() {
        Some(secret) => jar.add(session_cookie(secret, secure)),
        None => jar,
    }
}

fn clear_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

/// A session the platform no longer knows is already signed out
fn settle_logout(result: Result<(), AuthError>) -> Result<(), AuthError> {
    match result {
        Err(AuthError::NotAuthenticated) => {
            tracing::info!("Session already expired, clearing cookie");
            Ok(())
        }
        other => other,
    }
}

/// GET /api/auth/me
/// Get the identity of the current session
async fn me_handler(
    State(state): State<Arc<AuthApiState>>,
    jar: CookieJar,
) -> Result<Json<Identity>, AuthError> {
    let mut gate = gate_for(&state, &jar);

    match gate.restore().await {
        Some(identity) => Ok(Json(identity.clone())),
        None => Err(AuthError::NotAuthenticated),
    }
}

/// POST /api/auth/login
async fn login_handler(
    State(state): State<Arc<AuthApiState>>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthApiResponse>), AuthError> {
    request.validate()?;
    tracing::info!("Login attempt for email: {}", request.email);

    let mut gate = gate_for(&state, &jar);
    let user = gate.login(&request.email, &request.password).await?;

    tracing::info!("User logged in successfully: {}", user.email);

    let jar = with_session(jar, &gate, state.secure_cookies);
    Ok((jar, Json(AuthApiResponse { user })))
}

/// POST /api/auth/register
/// Create an account, then log into it
async fn register_handler(
    State(state): State<Arc<AuthApiState>>,
    jar: CookieJar,
    Json(form): Json<RegistrationForm>,
) -> Result<(CookieJar, Json<AuthApiResponse>), AuthError> {
    tracing::info!("Registration attempt for email: {}", form.email);

    let mut gate = gate_for(&state, &jar);
    let user = match gate.submit_registration(&form).await {
        Ok(user) => user,
        Err(err) => {
            if let AuthError::RegisteredButLoginFailed { login_error } = &err {
                tracing::warn!(
                    "Account created for {} but login failed: {}",
                    form.email,
                    login_error
                );
            }
            return Err(err);
        }
    };

    tracing::info!("User registered successfully: {}", user.email);

    let jar = with_session(jar, &gate, state.secure_cookies);
    Ok((jar, Json(AuthApiResponse { user })))
}

/// POST /api/auth/logout
async fn logout_handler(
    State(state): State<Arc<AuthApiState>>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<SuccessResponse>), AuthError> {
    tracing::info!("Logout request");

    let mut gate = gate_for(&state, &jar);
    settle_logout(gate.logout().await)?;

    let jar = clear_session(jar);
    Ok((
        jar,
        Json(SuccessResponse {
            success: true,
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// POST /api/auth/recovery
async fn recovery_handler(
    State(state): State<Arc<AuthApiState>>,
    Json(request): Json<RecoveryRequest>,
) -> Result<Json<SuccessResponse>, AuthError> {
    tracing::info!("Password recovery requested for: {}", request.email);

    let gate = SessionGate::new(state.platform.account(None));
    let redirect = state.platform.client.config().recovery_redirect_url();
    gate.reset_password(&request.email, &redirect).await?;

    Ok(Json(SuccessResponse {
        success: true,
        message: "Check your inbox for a password reset link".to_string(),
    }))
}
