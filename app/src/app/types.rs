use std::fmt;

use serde::{Deserialize, Serialize};

use super::core::presenter::DownloadRequest;
use super::core::session::PendingGeneration;

/// Opaque locator of a generated image, normally an `http(s)://` URI.
///
/// The studio never looks inside the reference except when a download is
/// requested, at which point the fetcher decides how to resolve it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactRef(String);

impl ArtifactRef {
    pub fn new(uri: impl Into<String>) -> Self {
        ArtifactRef(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtifactRef {
    fn from(s: &str) -> Self {
        ArtifactRef::new(s)
    }
}

impl From<String> for ArtifactRef {
    fn from(s: String) -> Self {
        ArtifactRef(s)
    }
}

/// Which part of the screen receives keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Prompt,
    QuickPrompts,
    History,
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Focus::Prompt => write!(f, "prompt"),
            Focus::QuickPrompts => write!(f, "quick prompts"),
            Focus::History => write!(f, "history"),
        }
    }
}

/// How a message dialog is styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// Modal state of the UI. `Normal` means no dialog is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
    Message {
        kind: MessageKind,
        title: String,
        content: String,
    },
}

/// Work the event loop must start on behalf of the `App`.
///
/// Handlers stay synchronous: they only queue effects, the runner owns the
/// async runtime that executes them.
#[derive(Debug)]
pub enum Effect {
    Generate(PendingGeneration),
    Download(DownloadRequest),
}
