use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use super::error::DownloadError;
use super::fetch::ArtifactFetcher;
use super::helpers::{atomic_write, unique_target};
use crate::app::core::presenter::DownloadRequest;

/// Saves artifacts into a directory.
pub struct Downloader {
    fetcher: Arc<dyn ArtifactFetcher>,
    dir: PathBuf,
}

impl Downloader {
    pub fn new(fetcher: Arc<dyn ArtifactFetcher>, dir: impl Into<PathBuf>) -> Self {
        Downloader {
            fetcher,
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Fetch the artifact and write it under the request's filename.
    /// Returns the path actually written; a numeric suffix is added when the
    /// name is already taken.
    pub async fn save(&self, request: &DownloadRequest) -> Result<PathBuf, DownloadError> {
        let bytes = self.fetcher.fetch(&request.artifact).await?;
        let target = unique_target(&self.dir, &request.filename);
        let written = target.clone();
        tokio::task::spawn_blocking(move || atomic_write(&target, &bytes))
            .await
            .map_err(|e| DownloadError::Io(io::Error::other(e.to_string())))??;
        info!(path = %written.display(), artifact = %request.artifact, "artifact saved");
        Ok(written)
    }
}
