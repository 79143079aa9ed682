#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use image_studio::generation::{CandidatePool, GenerationError, ImageBackend, InstantClock, SimulatedBackend};
use image_studio::ArtifactRef;

/// Simulated backend that completes instantly with a fixed seed.
pub fn instant_backend(seed: u64) -> Arc<SimulatedBackend> {
    Arc::new(
        SimulatedBackend::new(CandidatePool::default(), Duration::from_millis(3000))
            .with_seed(seed)
            .with_clock(Arc::new(InstantClock::new())),
    )
}

/// Backend that always fails with the given error.
pub struct FailingBackend(pub GenerationError);

#[async_trait]
impl ImageBackend for FailingBackend {
    async fn request_image(&self, _prompt: &str) -> Result<ArtifactRef, GenerationError> {
        Err(self.0.clone())
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Serve exactly one HTTP request with a canned response and return the
/// URL (with `path`) of the listener.
pub async fn serve_once(status_line: &'static str, content_type: &'static str, body: &'static str, path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.expect("accept");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = sock.read(&mut chunk).await.expect("read");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = header_end(&buf) {
                let headers = String::from_utf8_lossy(&buf[..pos]).to_ascii_lowercase();
                let len = headers
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= pos + 4 + len {
                    break;
                }
            }
        }
        let resp = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            content_type,
            body.len(),
            body
        );
        sock.write_all(resp.as_bytes()).await.expect("write");
        let _ = sock.shutdown().await;
    });
    format!("http://{}{}", addr, path)
}
