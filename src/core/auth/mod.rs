//! Authentication module for Drawtab
//!
//! This module provides authentication functionality including:
//! - The identity provider contract
//! - The session gate composing login/registration flows
//! - REST API endpoints for auth operations (server only)

#[cfg(feature = "ssr")]
pub mod api;
pub mod gate;
pub mod provider;
#[cfg(test)]
pub(crate) mod testing;

#[cfg(feature = "ssr")]
pub use api::{AuthApiState, SESSION_COOKIE, auth_api_router};
pub use gate::{AuthError, AuthState, REGISTERED_LOGIN_FAILED_MESSAGE, SessionGate};
pub use provider::{Account, Identity, IdentityProvider, ProviderError, Session};
