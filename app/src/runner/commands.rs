use std::path::PathBuf;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::app::{App, Effect, GenerationCompleted};
use crate::fs_op::{DownloadError, Downloader};
use crate::generation::GenerationController;

/// Results of background work, delivered back to the event loop.
#[derive(Debug)]
pub enum AppEvent {
    Generation(GenerationCompleted),
    Download(Result<PathBuf, DownloadError>),
}

/// Apply a background result to the app.
pub fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Generation(done) => app.on_generation_completed(done),
        AppEvent::Download(result) => app.on_download_finished(result),
    }
}

/// Starts effects on the async runtime and routes their results into a
/// channel the event loop drains.
pub struct Dispatcher {
    handle: Handle,
    tx: UnboundedSender<AppEvent>,
    controller: GenerationController,
    downloader: Arc<Downloader>,
}

impl Dispatcher {
    pub fn new(
        handle: Handle,
        tx: UnboundedSender<AppEvent>,
        controller: GenerationController,
        downloader: Arc<Downloader>,
    ) -> Self {
        Dispatcher {
            handle,
            tx,
            controller,
            downloader,
        }
    }

    pub fn dispatch(&self, effect: Effect) {
        let tx = self.tx.clone();
        match effect {
            Effect::Generate(pending) => {
                let controller = self.controller.clone();
                self.handle.spawn(async move {
                    let done = controller.run(pending).await;
                    if tx.send(AppEvent::Generation(done)).is_err() {
                        debug!("event loop gone, dropping generation result");
                    }
                });
            }
            Effect::Download(request) => {
                let downloader = Arc::clone(&self.downloader);
                self.handle.spawn(async move {
                    let result = downloader.save(&request).await;
                    if tx.send(AppEvent::Download(result)).is_err() {
                        debug!("event loop gone, dropping download result");
                    }
                });
            }
        }
    }

    /// Dispatch everything the app has queued.
    pub fn dispatch_all(&self, app: &mut App) {
        for effect in app.take_effects() {
            self.dispatch(effect);
        }
    }
}
