pub mod core;
pub mod settings;
pub mod types;

pub use core::history::{History, HISTORY_CAPACITY};
pub use core::presenter::{download_filename, DownloadRequest, ResultView};
pub use core::session::{GenerateOutcome, GenerationCompleted, PendingGeneration, Session};
pub use core::App;
pub use types::{ArtifactRef, Effect, Focus, MessageKind, Mode};
