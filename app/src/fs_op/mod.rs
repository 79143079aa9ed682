//! Filesystem side of the studio: saving artifacts and writing files safely.

pub mod download;
pub mod error;
pub mod fetch;
pub mod helpers;

pub use download::Downloader;
pub use error::DownloadError;
pub use fetch::{ArtifactFetcher, UriFetcher};
