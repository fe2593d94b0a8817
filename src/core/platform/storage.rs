//! File storage handle

use super::client::PlatformClient;

/// Storage buckets used by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Templates,
    GeneratedFlyers,
    UserPhotos,
}

#[derive(Clone)]
pub struct Storage {
    client: PlatformClient,
}

impl Storage {
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }

    pub fn bucket_id(&self, bucket: Bucket) -> &str {
        let ids = &self.client.config().buckets;
        match bucket {
            Bucket::Templates => &ids.templates,
            Bucket::GeneratedFlyers => &ids.generated_flyers,
            Bucket::UserPhotos => &ids.user_photos,
        }
    }

    fn file_url(&self, bucket: Bucket, file_id: &str, action: &str) -> String {
        format!(
            "{}?project={}",
            self.client.url(&format!(
                "/storage/buckets/{}/files/{}/{}",
                self.bucket_id(bucket),
                file_id,
                action
            )),
            self.client.config().project_id
        )
    }

    /// URL rendering the file inline, e.g. for `<img src>`
    pub fn file_view_url(&self, bucket: Bucket, file_id: &str) -> String {
        self.file_url(bucket, file_id, "view")
    }

    pub fn file_download_url(&self, bucket: Bucket, file_id: &str) -> String {
        self.file_url(bucket, file_id, "download")
    }
}
