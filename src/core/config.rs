//! Platform configuration from environment variables.
//!
//! Load configuration using `PlatformConfig::from_env()` after calling `dotenvy::dotenv()`.
//! Every identifier is treated as an opaque string.

/// Default platform endpoint
pub const DEFAULT_ENDPOINT: &str = "https://cloud.appwrite.io/v1";
/// Default public URL of this site, used for recovery links
pub const DEFAULT_APP_URL: &str = "http://127.0.0.1:3000";

/// Document collections used by the application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionIds {
    pub templates: String,
    pub contacts: String,
    pub events: String,
    pub generated_flyers: String,
    pub users: String,
}

/// Storage buckets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketIds {
    pub templates: String,
    pub generated_flyers: String,
    pub user_photos: String,
}

/// Serverless functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionIds {
    pub generate_flyer: String,
    pub send_email: String,
    pub schedule_events: String,
}

/// Platform configuration loaded from environment variables.
#[derive(Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// REST endpoint, e.g. https://cloud.appwrite.io/v1
    pub endpoint: String,
    pub project_id: String,
    /// Server API key. Required to read session secrets on login.
    pub api_key: Option<String>,
    pub database_id: String,
    pub collections: CollectionIds,
    pub buckets: BucketIds,
    pub functions: FunctionIds,
    /// Public URL of this site
    pub app_url: String,
}

impl PlatformConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).unwrap_or_default();

        Self {
            endpoint: lookup("APPWRITE_ENDPOINT")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            project_id: var("APPWRITE_PROJECT_ID"),
            api_key: lookup("APPWRITE_API_KEY").filter(|key| !key.is_empty()),
            database_id: var("APPWRITE_DATABASE_ID"),
            collections: CollectionIds {
                templates: var("COLLECTION_TEMPLATES"),
                contacts: var("COLLECTION_CONTACTS"),
                events: var("COLLECTION_EVENTS"),
                generated_flyers: var("COLLECTION_GENERATED_FLYERS"),
                users: var("COLLECTION_USERS"),
            },
            buckets: BucketIds {
                templates: var("BUCKET_TEMPLATES"),
                generated_flyers: var("BUCKET_GENERATED_FLYERS"),
                user_photos: var("BUCKET_USER_PHOTOS"),
            },
            functions: FunctionIds {
                generate_flyer: var("FUNCTION_GENERATE_FLYER"),
                send_email: var("FUNCTION_SEND_EMAIL"),
                schedule_events: var("FUNCTION_SCHEDULE_EVENTS"),
            },
            app_url: lookup("APP_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
        }
    }

    /// Check if a project is configured
    pub fn has_project(&self) -> bool {
        !self.project_id.is_empty()
    }

    /// Check if a server API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Check if a database is configured
    pub fn has_database(&self) -> bool {
        !self.database_id.is_empty()
    }

    /// Where password recovery emails send the user back to
    pub fn recovery_redirect_url(&self) -> String {
        format!("{}/auth/reset-password", self.app_url)
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

// Keeps the API key out of logs
impl std::fmt::Debug for PlatformConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformConfig")
            .field("endpoint", &self.endpoint)
            .field("project_id", &self.project_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("database_id", &self.database_id)
            .field("collections", &self.collections)
            .field("buckets", &self.buckets)
            .field("functions", &self.functions)
            .field("app_url", &self.app_url)
            .finish()
    }
}
