//! In-memory identity provider for tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::provider::{Account, Identity, IdentityProvider, ProviderError, Session};

#[derive(Clone)]
struct StoredAccount {
    id: String,
    name: String,
    password: String,
}

/// Identity provider backed by in-memory maps, with call counting and
/// one-shot failure injection.
#[derive(Default)]
pub struct MockProvider {
    accounts: Mutex<HashMap<String, StoredAccount>>,
    session: Mutex<Option<String>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    failures: Mutex<HashSet<&'static str>>,
    recoveries: Mutex<Vec<(String, String)>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, email: &str, password: &str, name: &str) -> Self {
        {
            let mut accounts = self.accounts.lock().unwrap();
            let id = format!("user{}", accounts.len() + 1);
            accounts.insert(
                email.to_string(),
                StoredAccount {
                    id,
                    name: name.to_string(),
                    password: password.to_string(),
                },
            );
        }
        self
    }

    /// Pretend a session for `email` already exists
    pub fn force_session(&self, email: &str) {
        *self.session.lock().unwrap() = Some(email.to_string());
    }

    /// Make the next call to `operation` fail with a transport error
    pub fn fail_next(&self, operation: &'static str) {
        self.failures.lock().unwrap().insert(operation);
    }

    pub fn calls(&self, operation: &'static str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(operation)
            .copied()
            .unwrap_or(0)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    pub fn has_session(&self) -> bool {
        self.session.lock().unwrap().is_some()
    }

    pub fn recovery_requests(&self) -> Vec<(String, String)> {
        self.recoveries.lock().unwrap().clone()
    }

    fn enter(&self, operation: &'static str) -> Result<(), ProviderError> {
        *self.calls.lock().unwrap().entry(operation).or_insert(0) += 1;
        if self.failures.lock().unwrap().remove(operation) {
            return Err(ProviderError::Transport(format!("{operation} failed")));
        }
        Ok(())
    }
}

impl IdentityProvider for MockProvider {
    async fn get_current_user(&self) -> Result<Identity, ProviderError> {
        self.enter("get_current_user")?;
        let email = self
            .session
            .lock()
            .unwrap()
            .clone()
            .ok_or(ProviderError::Unauthorized)?;
        let accounts = self.accounts.lock().unwrap();
        let account = accounts.get(&email).ok_or(ProviderError::Unauthorized)?;
        Ok(Identity {
            id: account.id.clone(),
            name: account.name.clone(),
            email,
            email_verified: false,
        })
    }

    async fn create_session(&self, email: &str, password: &str) -> Result<Session, ProviderError> {
        self.enter("create_session")?;
        let accounts = self.accounts.lock().unwrap();
        match accounts.get(email) {
            Some(account) if account.password == password => {
                *self.session.lock().unwrap() = Some(email.to_string());
                Ok(Session {
                    id: "session1".to_string(),
                    user_id: account.id.clone(),
                    secret: "secret1".to_string(),
                })
            }
            _ => Err(ProviderError::Rejected {
                status: 401,
                message: "Invalid credentials".to_string(),
            }),
        }
    }

    async fn create_account(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Account, ProviderError> {
        self.enter("create_account")?;
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(ProviderError::Conflict);
        }
        let id = format!("user{}", accounts.len() + 1);
        accounts.insert(
            email.to_string(),
            StoredAccount {
                id: id.clone(),
                name: name.to_string(),
                password: password.to_string(),
            },
        );
        Ok(Account {
            id,
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    async fn delete_session(&self) -> Result<(), ProviderError> {
        self.enter("delete_session")?;
        self.session
            .lock()
            .unwrap()
            .take()
            .map(|_| ())
            .ok_or(ProviderError::Unauthorized)
    }

    async fn create_password_recovery(
        &self,
        email: &str,
        redirect_url: &str,
    ) -> Result<(), ProviderError> {
        self.enter("create_password_recovery")?;
        self.recoveries
            .lock()
            .unwrap()
            .push((email.to_string(), redirect_url.to_string()));
        Ok(())
    }
}
