use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

use super::history::History;
use super::presenter::{download_filename, DownloadRequest, ResultView};
use crate::app::types::ArtifactRef;
use crate::generation::GenerationError;

/// Ticket for the generation transaction currently in flight.
///
/// Only `Session::begin_generation` creates one and only
/// `Session::complete_generation` consumes it, so the busy flag and the
/// artifact are never written outside that pair. The prompt is captured at
/// submission time; later edits to the editor do not affect it. A ticket
/// only closes the transaction it was issued for.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingGeneration {
    prompt: String,
    session: u64,
    seq: u64,
}

impl PendingGeneration {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Result of the backend call, ready to be applied to the session.
#[derive(Debug)]
pub struct GenerationCompleted {
    pub pending: PendingGeneration,
    pub outcome: Result<ArtifactRef, GenerationError>,
}

/// What a call to `generate` ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Empty prompt, a generation already in flight, or a ticket that does
    /// not belong to the open transaction; nothing changed.
    Skipped,
    Generated(ArtifactRef),
    Failed(GenerationError),
}

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// All state of one studio session. Lives in memory only.
#[derive(Clone, Debug)]
pub struct Session {
    id: u64,
    prompt: String,
    /// Sequence number of the open transaction, if any.
    in_flight: Option<u64>,
    next_seq: u64,
    artifact: Option<ArtifactRef>,
    history: History,
    last_error: Option<GenerationError>,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            prompt: String::new(),
            in_flight: None,
            next_seq: 0,
            artifact: None,
            history: History::default(),
            last_error: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // -- prompt editor ---------------------------------------------------

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Overwrite the prompt. No validation and no length limit.
    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    pub fn insert_char(&mut self, c: char) {
        self.prompt.push(c);
    }

    /// Remove the last user-perceived character (grapheme cluster).
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.prompt.grapheme_indices(true).next_back() {
            self.prompt.truncate(idx);
        }
    }

    pub fn clear_prompt(&mut self) {
        self.prompt.clear();
    }

    // -- history ledger --------------------------------------------------

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Copy `history[index]` into the prompt. Returns `false` (and leaves the
    /// prompt alone) when the index is out of range.
    pub fn select_from_history(&mut self, index: usize) -> bool {
        match self.history.get(index) {
            Some(entry) => {
                self.prompt = entry.to_string();
                true
            }
            None => false,
        }
    }

    // -- generation controller state ------------------------------------

    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn artifact(&self) -> Option<&ArtifactRef> {
        self.artifact.as_ref()
    }

    pub fn last_error(&self) -> Option<&GenerationError> {
        self.last_error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// True when `begin_generation` would open a transaction.
    pub fn can_generate(&self) -> bool {
        !self.is_generating() && !self.prompt.trim().is_empty()
    }

    /// Open a generation transaction.
    ///
    /// Returns `None` without touching any state when the trimmed prompt is
    /// empty or a generation is already in flight.
    pub fn begin_generation(&mut self) -> Option<PendingGeneration> {
        if !self.can_generate() {
            return None;
        }
        let prompt = self.prompt.trim().to_string();
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.in_flight = Some(seq);
        self.last_error = None;
        debug!(prompt = %prompt, seq, "generation started");
        Some(PendingGeneration {
            prompt,
            session: self.id,
            seq,
        })
    }

    /// Close the transaction opened by `begin_generation`.
    ///
    /// Success replaces the artifact and records the submitted prompt.
    /// Failure keeps artifact and history as they were and exposes the error
    /// through `last_error`. Either way the session is idle afterwards.
    ///
    /// A ticket from another session, or from a transaction that is no
    /// longer open, is rejected with `Skipped` and changes nothing.
    pub fn complete_generation(&mut self, done: GenerationCompleted) -> GenerateOutcome {
        let ticket = &done.pending;
        if ticket.session != self.id || self.in_flight != Some(ticket.seq) {
            warn!(
                seq = ticket.seq,
                foreign = ticket.session != self.id,
                "ignoring result for a generation this session is not running"
            );
            return GenerateOutcome::Skipped;
        }
        self.in_flight = None;
        match done.outcome {
            Ok(artifact) => {
                self.artifact = Some(artifact.clone());
                self.history.record(done.pending.prompt);
                debug!(artifact = %artifact, "generation completed");
                GenerateOutcome::Generated(artifact)
            }
            Err(err) => {
                debug!(error = %err, "generation failed");
                self.last_error = Some(err.clone());
                GenerateOutcome::Failed(err)
            }
        }
    }

    // -- result presenter ------------------------------------------------

    pub fn view(&self) -> ResultView<'_> {
        ResultView::from_parts(self.is_generating(), self.artifact.as_ref())
    }

    /// Build a save request for the current artifact, `None` if there is none.
    pub fn download(&self) -> Option<DownloadRequest> {
        self.download_at(Utc::now())
    }

    pub fn download_at(&self, now: DateTime<Utc>) -> Option<DownloadRequest> {
        self.artifact.as_ref().map(|artifact| DownloadRequest {
            artifact: artifact.clone(),
            filename: download_filename(now),
        })
    }
}
