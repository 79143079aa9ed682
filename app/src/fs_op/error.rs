use thiserror::Error;

/// Errors produced while saving an artifact to disk.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The reference is neither an HTTP(S) URL nor a local path.
    #[error("cannot download `{0}`: unsupported reference")]
    Unsupported(String),

    /// The remote side could not be reached or refused the request.
    #[error("fetching `{url}` failed: {msg}")]
    Fetch { url: String, msg: String },
}
