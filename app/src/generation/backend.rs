use async_trait::async_trait;

use super::error::GenerationError;
use crate::app::types::ArtifactRef;

/// The single remote operation the studio depends on.
#[async_trait]
pub trait ImageBackend: Send + Sync {
    async fn request_image(&self, prompt: &str) -> Result<ArtifactRef, GenerationError>;

    /// Name used in logs.
    fn name(&self) -> &'static str;
}
