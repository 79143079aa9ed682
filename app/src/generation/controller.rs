use std::sync::Arc;

use tracing::{info, warn};

use super::backend::ImageBackend;
use crate::app::core::session::{GenerateOutcome, GenerationCompleted, PendingGeneration, Session};

/// Drives generation transactions against an `ImageBackend`.
///
/// Cloning is cheap; clones share the backend.
#[derive(Clone)]
pub struct GenerationController {
    backend: Arc<dyn ImageBackend>,
}

impl GenerationController {
    pub fn new(backend: Arc<dyn ImageBackend>) -> Self {
        GenerationController { backend }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Run a whole transaction inline: begin, call the backend, apply.
    ///
    /// Returns `Skipped` without touching the session when the prompt is
    /// blank or a generation is already in flight.
    pub async fn generate(&self, session: &mut Session) -> GenerateOutcome {
        let Some(pending) = session.begin_generation() else {
            return GenerateOutcome::Skipped;
        };
        let done = self.run(pending).await;
        session.complete_generation(done)
    }

    /// Perform only the backend call for an already opened transaction.
    ///
    /// The event loop spawns this on the runtime and applies the returned
    /// value to its session once it arrives.
    pub async fn run(&self, pending: PendingGeneration) -> GenerationCompleted {
        let outcome = self.backend.request_image(pending.prompt()).await;
        match &outcome {
            Ok(artifact) => info!(backend = self.backend.name(), artifact = %artifact, "image generated"),
            Err(err) => warn!(backend = self.backend.name(), error = %err, "image generation failed"),
        }
        GenerationCompleted { pending, outcome }
    }
}
