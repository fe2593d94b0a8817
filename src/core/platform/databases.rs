//! Document database handle

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::{PlatformClient, PlatformError};

/// Collections of the application database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Templates,
    Contacts,
    Events,
    GeneratedFlyers,
    Users,
}

/// Page of documents returned by a list call
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList<T> {
    pub total: u64,
    pub documents: Vec<T>,
}

#[derive(Clone)]
pub struct Databases {
    client: PlatformClient,
}

impl Databases {
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }

    pub fn collection_id(&self, collection: Collection) -> &str {
        let ids = &self.client.config().collections;
        match collection {
            Collection::Templates => &ids.templates,
            Collection::Contacts => &ids.contacts,
            Collection::Events => &ids.events,
            Collection::GeneratedFlyers => &ids.generated_flyers,
            Collection::Users => &ids.users,
        }
    }

    pub fn documents_path(&self, collection: Collection) -> String {
        format!(
            "/databases/{}/collections/{}/documents",
            self.client.config().database_id,
            self.collection_id(collection)
        )
    }

    pub async fn create_document<D: Serialize, T: DeserializeOwned>(
        &self,
        collection: Collection,
        data: &D,
        session: Option<&str>,
    ) -> Result<T, PlatformError> {
        let request = self
            .client
            .request(Method::POST, &self.documents_path(collection), session)
            .json(&json!({ "documentId": "unique()", "data": data }));
        self.client.send_json(request).await
    }

    pub async fn get_document<T: DeserializeOwned>(
        &self,
        collection: Collection,
        document_id: &str,
        session: Option<&str>,
    ) -> Result<T, PlatformError> {
        let path = format!("{}/{}", self.documents_path(collection), document_id);
        let request = self.client.request(Method::GET, &path, session);
        self.client.send_json(request).await
    }

    pub async fn list_documents<T: DeserializeOwned>(
        &self,
        collection: Collection,
        session: Option<&str>,
    ) -> Result<DocumentList<T>, PlatformError> {
        let request = self
            .client
            .request(Method::GET, &self.documents_path(collection), session);
        self.client.send_json(request).await
    }
}
