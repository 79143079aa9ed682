mod common;

use std::sync::Arc;

use image_studio::app::settings::Settings;
use image_studio::fs_op::{Downloader, UriFetcher};
use image_studio::generation::{CandidatePool, GenerationController, GenerationError};
use image_studio::runner::commands::{apply_event, AppEvent, Dispatcher};
use image_studio::App;
use tokio::sync::mpsc::unbounded_channel;

use common::{instant_backend, FailingBackend};

fn dispatcher_with(
    controller: GenerationController,
) -> (Dispatcher, tokio::sync::mpsc::UnboundedReceiver<AppEvent>) {
    let (tx, rx) = unbounded_channel();
    let fetcher = Arc::new(UriFetcher::new(std::time::Duration::from_secs(5)).unwrap());
    let downloader = Arc::new(Downloader::new(fetcher, std::env::temp_dir()));
    let dispatcher = Dispatcher::new(tokio::runtime::Handle::current(), tx, controller, downloader);
    (dispatcher, rx)
}

#[tokio::test]
async fn busy_immediately_then_idle_after_completion() {
    let (dispatcher, mut rx) = dispatcher_with(GenerationController::new(instant_backend(11)));
    let mut app = App::new(Settings::default());

    app.session.set_prompt("sunset");
    assert!(app.generate());
    assert!(app.session.is_generating());

    // edits while in flight must not change what gets recorded
    app.session.set_prompt("sunrise");
    dispatcher.dispatch_all(&mut app);

    // second attempt while busy is refused
    assert!(!app.generate());
    assert!(app.take_effects().is_empty());

    let event = rx.recv().await.expect("generation result");
    apply_event(&mut app, event);

    assert!(!app.session.is_generating());
    assert_eq!(app.session.history().to_vec(), vec!["sunset"]);
    assert!(CandidatePool::default().contains(app.session.artifact().unwrap()));
    assert_eq!(app.session.prompt(), "sunrise");
}

#[tokio::test]
async fn failing_backend_reports_through_channel() {
    let controller = GenerationController::new(Arc::new(FailingBackend(GenerationError::Quota("429".into()))));
    let (dispatcher, mut rx) = dispatcher_with(controller);
    let mut app = App::new(Settings::default());

    app.session.set_prompt("too many");
    app.generate();
    dispatcher.dispatch_all(&mut app);
    apply_event(&mut app, rx.recv().await.unwrap());

    assert!(!app.session.is_generating());
    assert!(app.session.artifact().is_none());
    assert!(app.session.history().is_empty());
    assert_eq!(app.session.last_error(), Some(&GenerationError::Quota("429".into())));
}

#[tokio::test]
async fn nothing_dispatched_without_effects() {
    let (dispatcher, mut rx) = dispatcher_with(GenerationController::new(instant_backend(0)));
    let mut app = App::new(Settings::default());
    app.generate();
    app.download();
    dispatcher.dispatch_all(&mut app);
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());
}
