//! Account handle: the platform's identity provider
//!
//! One `PlatformAccount` serves one browser session. The session secret is
//! adopted on login and replayed on every following call.

use std::sync::RwLock;

use reqwest::Method;
use serde_json::json;

use super::client::PlatformClient;
use crate::core::auth::{Account, Identity, IdentityProvider, ProviderError, Session};

/// Lets the platform pick the account id
const UNIQUE_ID: &str = "unique()";

pub struct PlatformAccount {
    client: PlatformClient,
    session: RwLock<Option<String>>,
}

impl PlatformAccount {
    pub fn new(client: PlatformClient, session: Option<String>) -> Self {
        Self {
            client,
            session: RwLock::new(session),
        }
    }

    /// Secret of the active session, if any
    pub fn session_secret(&self) -> Option<String> {
        self.session.read().ok().and_then(|s| s.clone())
    }

    fn set_session(&self, secret: Option<String>) {
        if let Ok(mut session) = self.session.write() {
            *session = secret;
        }
    }
}

impl IdentityProvider for PlatformAccount {
    async fn get_current_user(&self) -> Result<Identity, ProviderError> {
        let secret = self.session_secret().ok_or(ProviderError::Unauthorized)?;
        let request = self.client.request(Method::GET, "/account", Some(&secret));
        Ok(self.client.send_json(request).await?)
    }

    async fn create_session(&self, email: &str, password: &str) -> Result<Session, ProviderError> {
        let request = self
            .client
            .request(Method::POST, "/account/sessions/email", None)
            .json(&json!({ "email": email, "password": password }));
        let session: Session = self.client.send_json(request).await?;

        if session.secret.is_empty() {
            tracing::warn!("Session created without a secret; is APPWRITE_API_KEY set?");
        } else {
            self.set_session(Some(session.secret.clone()));
        }
        Ok(session)
    }

    async fn create_account(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Account, ProviderError> {
        let request = self
            .client
            .request(Method::POST, "/account", None)
            .json(&json!({
                "userId": UNIQUE_ID,
                "email": email,
                "password": password,
                "name": name,
            }));
        Ok(self.client.send_json(request).await?)
    }

    async fn delete_session(&self) -> Result<(), ProviderError> {
        let secret = self.session_secret().ok_or(ProviderError::Unauthorized)?;
        let request = self
            .client
            .request(Method::DELETE, "/account/sessions/current", Some(&secret));
        self.client.send_empty(request).await?;
        self.set_session(None);
        Ok(())
    }

    async fn create_password_recovery(
        &self,
        email: &str,
        redirect_url: &str,
    ) -> Result<(), ProviderError> {
        let request = self
            .client
            .request(Method::POST, "/account/recovery", None)
            .json(&json!({ "email": email, "url": redirect_url }));
        self.client.send_empty(request).await?;
        Ok(())
    }
}
