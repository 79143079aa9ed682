use thiserror::Error;

/// Failures a generation backend can report.
///
/// None of these are fatal: the session returns to idle and the user may
/// retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The backend could not be reached or the request timed out.
    #[error("network error: {0}")]
    Network(String),

    /// The backend refused the request because a usage limit was hit.
    #[error("quota exceeded: {0}")]
    Quota(String),

    /// The backend rejected the prompt itself.
    #[error("prompt rejected: {0}")]
    InvalidPrompt(String),

    /// Anything else that went wrong on the backend side.
    #[error("backend error: {0}")]
    Backend(String),
}

impl GenerationError {
    /// Short label used in the status line.
    pub fn kind_label(&self) -> &'static str {
        match self {
            GenerationError::Network(_) => "network",
            GenerationError::Quota(_) => "quota",
            GenerationError::InvalidPrompt(_) => "invalid prompt",
            GenerationError::Backend(_) => "backend",
        }
    }
}
