use std::path::PathBuf;

use tracing::{debug, warn};

use super::settings::Settings;
use super::types::{Effect, Focus, MessageKind, Mode};
use crate::errors;
use crate::fs_op::DownloadError;
use crate::generation::catalog::QUICK_PROMPTS;

// submodules live in `app/src/app/core/`

pub mod history;
mod navigation;
pub mod presenter;
pub mod session;

use self::session::{GenerateOutcome, GenerationCompleted, Session};

/// Everything the terminal front end shows and edits.
///
/// `session` is the studio state proper; the remaining fields are view
/// state (focus, list cursors, dialogs) and the queue of effects the runner
/// still has to start.
pub struct App {
    pub session: Session,
    pub settings: Settings,
    pub mode: Mode,
    pub focus: Focus,
    pub quick_selected: usize,
    pub history_selected: usize,
    /// Last informational message for the status line.
    pub status: Option<String>,
    /// Frame counter driving the busy spinner.
    pub tick: u64,
    effects: Vec<Effect>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        App {
            session: Session::new(),
            settings,
            mode: Mode::Normal,
            focus: Focus::Prompt,
            quick_selected: 0,
            history_selected: 0,
            status: None,
            tick: 0,
            effects: Vec::new(),
        }
    }

    /// Start a generation if the session allows one. Returns whether an
    /// effect was queued.
    pub fn generate(&mut self) -> bool {
        match self.session.begin_generation() {
            Some(pending) => {
                self.status = None;
                self.effects.push(Effect::Generate(pending));
                true
            }
            None => {
                debug!(busy = self.session.is_generating(), "generate ignored");
                false
            }
        }
    }

    /// Queue a save of the current artifact. No-op without one.
    pub fn download(&mut self) -> bool {
        match self.session.download() {
            Some(request) => {
                self.status = Some(format!("Saving {}...", request.filename));
                self.effects.push(Effect::Download(request));
                true
            }
            None => false,
        }
    }

    /// Copy quick prompt `index` into the editor.
    pub fn use_quick_prompt(&mut self, index: usize) -> bool {
        match QUICK_PROMPTS.get(index) {
            Some(p) => {
                self.session.set_prompt(*p);
                true
            }
            None => false,
        }
    }

    pub fn use_history_entry(&mut self, index: usize) -> bool {
        self.session.select_from_history(index)
    }

    /// Drain the effects queued since the last call.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn on_generation_completed(&mut self, done: GenerationCompleted) {
        if let GenerateOutcome::Generated(_) = self.session.complete_generation(done) {
            // the new entry is at the top; keep the cursor there
            self.history_selected = 0;
        }
        self.clamp_selection();
    }

    pub fn on_download_finished(&mut self, result: Result<PathBuf, DownloadError>) {
        match result {
            Ok(path) => {
                self.status = Some(format!("Saved to {}", path.display()));
                self.mode = Mode::Message {
                    kind: MessageKind::Info,
                    title: "Download complete".to_string(),
                    content: format!("Image saved to\n{}", path.display()),
                };
            }
            Err(err) => {
                warn!(error = %err, "download failed");
                self.status = Some("Download failed".to_string());
                self.mode = Mode::Message {
                    kind: MessageKind::Error,
                    title: "Download failed".to_string(),
                    content: errors::render_download_error(&err),
                };
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}
