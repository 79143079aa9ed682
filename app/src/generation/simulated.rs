use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::backend::ImageBackend;
use super::catalog::CandidatePool;
use super::clock::{Clock, TokioClock};
use super::error::GenerationError;
use crate::app::types::ArtifactRef;

/// Delay of the simulated remote call when nothing else is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(3000);

/// Stand-in for a real backend: waits, then picks a random candidate.
///
/// It never fails. Both the wait (`Clock`) and the random source are
/// injectable so tests can make it instant and deterministic.
pub struct SimulatedBackend {
    pool: CandidatePool,
    delay: Duration,
    clock: Arc<dyn Clock>,
    rng: Mutex<StdRng>,
}

impl SimulatedBackend {
    pub fn new(pool: CandidatePool, delay: Duration) -> Self {
        SimulatedBackend {
            pool,
            delay,
            clock: Arc::new(TokioClock),
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    fn pick(&self) -> ArtifactRef {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let candidates = self.pool.as_slice();
        let idx = rng.random_range(0..candidates.len());
        candidates[idx].clone()
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        SimulatedBackend::new(CandidatePool::default(), DEFAULT_DELAY)
    }
}

#[async_trait]
impl ImageBackend for SimulatedBackend {
    async fn request_image(&self, prompt: &str) -> Result<ArtifactRef, GenerationError> {
        debug!(prompt = %prompt, delay_ms = self.delay.as_millis() as u64, "simulating generation");
        self.clock.sleep(self.delay).await;
        Ok(self.pick())
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
