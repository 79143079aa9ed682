use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::error::DownloadError;
use crate::app::types::ArtifactRef;

/// Resolves an artifact reference to its bytes.
#[async_trait]
pub trait ArtifactFetcher: Send + Sync {
    async fn fetch(&self, artifact: &ArtifactRef) -> Result<Vec<u8>, DownloadError>;
}

/// Fetcher for the reference forms the studio produces: `http(s)://` URLs
/// go through `reqwest`, `file://` URIs and absolute paths are read from
/// the local filesystem.
pub struct UriFetcher {
    client: Client,
}

impl UriFetcher {
    pub fn new(timeout: Duration) -> Result<Self, DownloadError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| DownloadError::Fetch {
            url: String::new(),
            msg: e.to_string(),
        })?;
        Ok(UriFetcher { client })
    }

    async fn fetch_http(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let fetch_err = |e: reqwest::Error| DownloadError::Fetch {
            url: url.to_string(),
            msg: e.to_string(),
        };
        let response = self.client.get(url).send().await.map_err(fetch_err)?;
        let response = response.error_for_status().map_err(fetch_err)?;
        let bytes = response.bytes().await.map_err(fetch_err)?;
        Ok(bytes.to_vec())
    }
}

/// Local path named by `reference`, if it names one.
pub(crate) fn local_path(reference: &str) -> Option<PathBuf> {
    if let Some(rest) = reference.strip_prefix("file://") {
        return Some(PathBuf::from(rest));
    }
    let p = PathBuf::from(reference);
    p.is_absolute().then_some(p)
}

#[async_trait]
impl ArtifactFetcher for UriFetcher {
    async fn fetch(&self, artifact: &ArtifactRef) -> Result<Vec<u8>, DownloadError> {
        let reference = artifact.as_str();
        debug!(reference = %reference, "fetching artifact");
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return self.fetch_http(reference).await;
        }
        match local_path(reference) {
            Some(path) => Ok(tokio::fs::read(path).await?),
            None => Err(DownloadError::Unsupported(reference.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_path_forms() {
        assert_eq!(local_path("file:///tmp/a.jpg"), Some(PathBuf::from("/tmp/a.jpg")));
        assert_eq!(local_path("relative/a.jpg"), None);
        assert_eq!(local_path("ftp://host/a.jpg"), None);
    }

    #[tokio::test]
    async fn unsupported_scheme_is_rejected() {
        let fetcher = UriFetcher::new(Duration::from_secs(1)).unwrap();
        let err = fetcher.fetch(&ArtifactRef::new("ftp://host/a.jpg")).await.unwrap_err();
        assert!(matches!(err, DownloadError::Unsupported(_)));
    }
}
