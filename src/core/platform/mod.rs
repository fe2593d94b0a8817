//! Hosted platform client
//!
//! Thin handles over the platform REST API:
//! - Account (identity provider)
//! - Databases (document storage)
//! - Storage (file storage)
//! - Functions (remote execution)

mod account;
mod client;
mod databases;
mod functions;
mod storage;

pub use account::PlatformAccount;
pub use client::{KEY_HEADER, PROJECT_HEADER, PlatformClient, PlatformError, SESSION_HEADER};
pub use databases::{Collection, Databases, DocumentList};
pub use functions::{Execution, Functions, PlatformFunction};
pub use storage::{Bucket, Storage};

use crate::core::config::PlatformConfig;

/// All platform handles, sharing one HTTP client
#[derive(Clone)]
pub struct Platform {
    pub client: PlatformClient,
    pub databases: Databases,
    pub storage: Storage,
    pub functions: Functions,
}

impl Platform {
    pub fn new(config: PlatformConfig) -> Self {
        let client = PlatformClient::new(config);
        Self {
            databases: Databases::new(client.clone()),
            storage: Storage::new(client.clone()),
            functions: Functions::new(client.clone()),
            client,
        }
    }

    /// Account handle for one browser session
    pub fn account(&self, session: Option<String>) -> PlatformAccount {
        PlatformAccount::new(self.client.clone(), session)
    }
}
