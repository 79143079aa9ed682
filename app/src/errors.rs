//! User-facing rendering of errors for dialogs and the status line.

use crate::fs_op::DownloadError;
use crate::generation::GenerationError;

/// One-line message for the status bar after a failed generation.
pub fn render_generation_error(err: &GenerationError) -> String {
    let hint = match err {
        GenerationError::Network(_) => "check your connection and try again",
        GenerationError::Quota(_) => "wait a moment before generating again",
        GenerationError::InvalidPrompt(_) => "rephrase the prompt and try again",
        GenerationError::Backend(_) => "try again later",
    };
    format!("Generation failed ({}): {} - {}", err.kind_label(), err, hint)
}

/// Multi-line message for the download error dialog.
pub fn render_download_error(err: &DownloadError) -> String {
    match err {
        DownloadError::Io(e) => format!("Could not write the image:\n{}", e),
        DownloadError::Unsupported(r) => format!("This image cannot be saved:\n{}", r),
        DownloadError::Fetch { url, msg } => format!("Could not fetch the image from\n{}\n\n{}", url, msg),
    }
}
