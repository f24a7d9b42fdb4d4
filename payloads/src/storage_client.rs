//! Client for the bucket-scoped object storage service that hosts listing
//! photos and village thumbnails.

use crate::ClientError;

/// A client for one bucket of the object storage service.
///
/// Uploads land under `folder/` inside the bucket; object names are
/// collision-resistant (millisecond timestamp + random suffix + the
/// original extension) so callers never overwrite each other.
#[derive(Clone)]
pub struct StorageClient {
    pub address: String,
    pub bucket: String,
    pub folder: String,
    pub token: Option<String>,
    pub inner_client: reqwest::Client,
}

impl StorageClient {
    fn object_url(&self, path: &str) -> String {
        format!("{}/object/{}/{path}", self.address, self.bucket)
    }

    /// The URL to use in `<img src>` attributes.
    pub fn public_url(&self, path: &str) -> String {
        format!("{}/object/public/{}/{path}", self.address, self.bucket)
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Generate a fresh object path for an upload.
    pub fn object_name(&self, original_filename: &str) -> String {
        let timestamp = jiff::Timestamp::now().as_millisecond();
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        object_name_with(
            &self.folder,
            original_filename,
            timestamp,
            &suffix[..8],
        )
    }

    /// Upload raw bytes and return the object's public URL.
    ///
    /// Validation (MIME allow-list, size ceiling) is the caller's job; this
    /// method only moves bytes.
    pub async fn upload(
        &self,
        path: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String, ClientError> {
        let response = self
            .authorize(self.inner_client.post(self.object_url(path)))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::APIError(
                response.status(),
                response.text().await?,
            ));
        }
        Ok(self.public_url(path))
    }

    /// Delete the object behind a previously-issued URL.
    ///
    /// Returns `false` on any failure, including URLs that do not parse as
    /// objects of this bucket. Never errors out: a failed cleanup leaves an
    /// orphaned object, which is not worth breaking the caller's flow over.
    pub async fn delete(&self, url: &str) -> bool {
        let Some(path) = self.object_path_from_url(url) else {
            return false;
        };
        match self
            .authorize(self.inner_client.delete(self.object_url(&path)))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Extract the object path from a public or signed object URL scoped to
    /// this bucket.
    pub fn object_path_from_url(&self, url: &str) -> Option<String> {
        let public_prefix =
            format!("{}/object/public/{}/", self.address, self.bucket);
        let signed_prefix =
            format!("{}/object/sign/{}/", self.address, self.bucket);

        if let Some(path) = url.strip_prefix(&public_prefix) {
            if path.is_empty() {
                return None;
            }
            return Some(path.to_string());
        }
        if let Some(rest) = url.strip_prefix(&signed_prefix) {
            // Signed URLs carry a token query string.
            let path = rest.split('?').next().unwrap_or("");
            if path.is_empty() {
                return None;
            }
            return Some(path.to_string());
        }
        None
    }
}

fn object_name_with(
    folder: &str,
    original_filename: &str,
    timestamp_ms: i64,
    suffix: &str,
) -> String {
    let extension = original_filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.len() <= 8)
        .unwrap_or_else(|| "bin".to_string());
    format!("{folder}/{timestamp_ms}-{suffix}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StorageClient {
        StorageClient {
            address: "https://storage.example.com".to_string(),
            bucket: "media".to_string(),
            folder: "villages".to_string(),
            token: None,
            inner_client: reqwest::Client::new(),
        }
    }

    #[test]
    fn object_name_keeps_extension() {
        let name = object_name_with("villages", "thumb.JPG", 1700000000000, "a1b2c3d4");
        assert_eq!(name, "villages/1700000000000-a1b2c3d4.jpg");
    }

    #[test]
    fn object_name_without_extension_falls_back() {
        let name = object_name_with("villages", "thumbnail", 1700000000000, "a1b2c3d4");
        assert_eq!(name, "villages/1700000000000-a1b2c3d4.bin");
    }

    #[test]
    fn parses_public_url() {
        let c = client();
        let url = c.public_url("villages/123-abc.png");
        assert_eq!(
            c.object_path_from_url(&url),
            Some("villages/123-abc.png".to_string())
        );
    }

    #[test]
    fn parses_signed_url() {
        let c = client();
        let url = "https://storage.example.com/object/sign/media/villages/123-abc.png?token=xyz";
        assert_eq!(
            c.object_path_from_url(url),
            Some("villages/123-abc.png".to_string())
        );
    }

    #[test]
    fn rejects_foreign_urls() {
        let c = client();
        assert_eq!(c.object_path_from_url("https://elsewhere.com/x.png"), None);
        // Right host, wrong bucket.
        assert_eq!(
            c.object_path_from_url(
                "https://storage.example.com/object/public/other/x.png"
            ),
            None
        );
        // Bucket prefix with no object path.
        assert_eq!(
            c.object_path_from_url(
                "https://storage.example.com/object/public/media/"
            ),
            None
        );
    }
}
