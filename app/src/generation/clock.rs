use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

/// Source of the simulated backend's waiting.
///
/// Production code uses `TokioClock`; tests use `InstantClock` so a
/// generation completes without a real timer.
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real time, backed by `tokio::time::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately and remembers every duration it was asked to wait.
#[derive(Debug, Default)]
pub struct InstantClock {
    requested: Mutex<Vec<Duration>>,
}

impl InstantClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> Vec<Duration> {
        self.requested
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Clock for InstantClock {
    async fn sleep(&self, duration: Duration) {
        self.requested
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(duration);
    }
}
