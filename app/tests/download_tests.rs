mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use assert_fs::prelude::*;
use assert_fs::TempDir;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use image_studio::app::{DownloadRequest, Session};
use image_studio::fs_op::{ArtifactFetcher, DownloadError, Downloader, UriFetcher};
use image_studio::generation::GenerationController;
use image_studio::ArtifactRef;

/// Fetcher that hands out fixed bytes and remembers what it was asked for.
#[derive(Default)]
struct RecordingFetcher {
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl ArtifactFetcher for RecordingFetcher {
    async fn fetch(&self, artifact: &ArtifactRef) -> Result<Vec<u8>, DownloadError> {
        self.seen.lock().unwrap().push(artifact.to_string());
        Ok(b"fake-jpeg".to_vec())
    }
}

#[tokio::test]
async fn download_saves_current_artifact_under_timestamp_name() {
    let temp = TempDir::new().unwrap();
    let fetcher = Arc::new(RecordingFetcher::default());
    let downloader = Downloader::new(fetcher.clone(), temp.path());

    let controller = GenerationController::new(common::instant_backend(8));
    let mut session = Session::new();
    session.set_prompt("forest");
    controller.generate(&mut session).await;

    let now = Utc.timestamp_millis_opt(1_720_000_000_000).unwrap();
    let request = session.download_at(now).expect("artifact present");
    let path = downloader.save(&request).await.unwrap();

    assert_eq!(path, temp.path().join("ai-generated-1720000000000.jpg"));
    temp.child("ai-generated-1720000000000.jpg").assert("fake-jpeg");
    assert_eq!(fetcher.seen.lock().unwrap().as_slice(), &[session.artifact().unwrap().to_string()]);
}

#[tokio::test]
async fn download_without_artifact_saves_nothing() {
    let temp = TempDir::new().unwrap();
    let fetcher = Arc::new(RecordingFetcher::default());
    let _downloader = Downloader::new(fetcher.clone(), temp.path());

    let session = Session::new();
    assert!(session.download().is_none());
    assert!(fetcher.seen.lock().unwrap().is_empty());
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn repeated_name_gets_numeric_suffix() {
    let temp = TempDir::new().unwrap();
    let downloader = Downloader::new(Arc::new(RecordingFetcher::default()), temp.path());
    let request = DownloadRequest {
        artifact: ArtifactRef::new("https://img/1.jpg"),
        filename: "ai-generated-1.jpg".to_string(),
    };
    let first = downloader.save(&request).await.unwrap();
    let second = downloader.save(&request).await.unwrap();
    assert_ne!(first, second);
    temp.child("ai-generated-1-1.jpg").assert("fake-jpeg");
}

#[tokio::test]
async fn local_file_reference_is_copied() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    let image = src.child("picture.jpg");
    image.write_binary(&[0xff, 0xd8, 0xff, 0x00]).unwrap();

    let downloader = Downloader::new(Arc::new(UriFetcher::new(Duration::from_secs(5)).unwrap()), dst.path());
    let request = DownloadRequest {
        artifact: ArtifactRef::new(format!("file://{}", image.path().display())),
        filename: "out.jpg".to_string(),
    };
    let saved = downloader.save(&request).await.unwrap();
    assert_eq!(std::fs::read(saved).unwrap(), vec![0xff, 0xd8, 0xff, 0x00]);
}

#[tokio::test]
async fn missing_local_file_is_io_error() {
    let dst = TempDir::new().unwrap();
    let downloader = Downloader::new(Arc::new(UriFetcher::new(Duration::from_secs(5)).unwrap()), dst.path());
    let request = DownloadRequest {
        artifact: ArtifactRef::new(format!("file://{}", dst.path().join("nope.jpg").display())),
        filename: "out.jpg".to_string(),
    };
    assert!(matches!(downloader.save(&request).await, Err(DownloadError::Io(_))));
    dst.child("out.jpg").assert(predicates::path::missing());
}

#[tokio::test]
async fn http_reference_is_fetched() {
    let url = common::serve_once("200 OK", "image/jpeg", "JPEGBYTES", "/img.jpg").await;
    let dst = TempDir::new().unwrap();
    let downloader = Downloader::new(Arc::new(UriFetcher::new(Duration::from_secs(5)).unwrap()), dst.path());
    let request = DownloadRequest {
        artifact: ArtifactRef::new(url),
        filename: "remote.jpg".to_string(),
    };
    downloader.save(&request).await.unwrap();
    dst.child("remote.jpg").assert("JPEGBYTES");
}

#[tokio::test]
async fn http_error_status_is_fetch_error() {
    let url = common::serve_once("404 Not Found", "text/plain", "gone", "/img.jpg").await;
    let dst = TempDir::new().unwrap();
    let downloader = Downloader::new(Arc::new(UriFetcher::new(Duration::from_secs(5)).unwrap()), dst.path());
    let request = DownloadRequest {
        artifact: ArtifactRef::new(url),
        filename: "remote.jpg".to_string(),
    };
    assert!(matches!(downloader.save(&request).await, Err(DownloadError::Fetch { .. })));
}
