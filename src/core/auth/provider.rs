//! Identity provider contract
//!
//! The hosted platform owns accounts and sessions. The rest of the crate only
//! talks to it through [`IdentityProvider`].

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Authenticated account as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "emailVerification", default)]
    pub email_verified: bool,
}

/// Session created by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Only returned when the request was made with an API key
    #[serde(default)]
    pub secret: String,
}

/// Account created by registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Provider call failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("Not authenticated")]
    Unauthorized,

    #[error("A user with the same email already exists")]
    Conflict,

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Session and account operations of the identity provider
pub trait IdentityProvider {
    /// Account of the current session, or `ProviderError::Unauthorized`
    fn get_current_user(&self) -> impl Future<Output = Result<Identity, ProviderError>> + Send;

    fn create_session(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session, ProviderError>> + Send;

    fn create_account(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> impl Future<Output = Result<Account, ProviderError>> + Send;

    fn delete_session(&self) -> impl Future<Output = Result<(), ProviderError>> + Send;

    fn create_password_recovery(
        &self,
        email: &str,
        redirect_url: &str,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;
}
