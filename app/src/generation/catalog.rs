//! Static content of the studio: candidate images, quick prompts and tips.

use crate::app::types::ArtifactRef;

pub const DEFAULT_CANDIDATES: [&str; 5] = [
    "https://images.pexels.com/photos/1103970/pexels-photo-1103970.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/1576937/pexels-photo-1576937.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/1933239/pexels-photo-1933239.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/1591447/pexels-photo-1591447.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/1438761/pexels-photo-1438761.jpeg?auto=compress&cs=tinysrgb&w=800",
];

pub const QUICK_PROMPTS: [&str; 5] = [
    "A serene mountain landscape at sunset",
    "Futuristic city with neon lights",
    "Abstract art with vibrant colors",
    "Peaceful garden with butterflies",
    "Space nebula with bright stars",
];

pub const PRO_TIPS: [&str; 4] = [
    "Be specific about colors, lighting, and mood",
    "Include artistic styles like \"watercolor\", \"digital art\", or \"photorealistic\"",
    "Add details about composition and perspective",
    "Use descriptive adjectives to enhance the result",
];

/// Fixed, non-empty set of references the simulated backend picks from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidatePool(Vec<ArtifactRef>);

impl CandidatePool {
    /// Build a pool from `items`, skipping blank entries. Returns `None` when
    /// nothing usable remains.
    pub fn new<I, S>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let refs: Vec<ArtifactRef> = items
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .map(ArtifactRef::from)
            .collect();
        if refs.is_empty() {
            None
        } else {
            Some(CandidatePool(refs))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[ArtifactRef] {
        &self.0
    }

    pub fn contains(&self, artifact: &ArtifactRef) -> bool {
        self.0.contains(artifact)
    }
}

impl Default for CandidatePool {
    fn default() -> Self {
        CandidatePool(DEFAULT_CANDIDATES.iter().map(|s| ArtifactRef::from(*s)).collect())
    }
}
