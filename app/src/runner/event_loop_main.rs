use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tracing::{info, warn};

use crate::app::settings::runtime_keybinds::{self, Keybinds};
use crate::app::settings::Settings;
use crate::app::App;
use crate::fs_op::{Downloader, UriFetcher};
use crate::generation::{build_backend, GenerationController};
use crate::input::{poll, read_event, InputEvent};
use crate::runner::commands::{apply_event, AppEvent, Dispatcher};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal, StudioTerminal, TerminalError};
use crate::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app(settings: Settings) -> anyhow::Result<()> {
    let mut app = App::new(settings);
    let settings = &app.settings;
    runtime_keybinds::set(Keybinds::with_overrides(&settings.keybinds));
    ui::colors::set_theme(&settings.theme);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("image-studio-worker")
        .enable_all()
        .build()?;

    let (controller, downloader) = build_services(&app)?;
    info!(
        backend = controller.backend_name(),
        delay_ms = settings.generation_delay_ms,
        endpoint = settings.endpoint.as_deref().unwrap_or("-"),
        download_dir = %downloader.dir().display(),
        "starting studio"
    );

    let (tx, mut rx) = unbounded_channel();
    let dispatcher = Dispatcher::new(runtime.handle().clone(), tx, controller, downloader);

    let mut terminal = init_terminal()?;
    // Always restore the terminal, even when the loop failed.
    let result = event_loop(&mut terminal, &mut app, &dispatcher, &mut rx);
    let restored = restore_terminal(terminal);

    // In-flight work has nowhere to report to any more.
    runtime.shutdown_timeout(Duration::from_millis(200));
    info!("studio closed");
    finish(result, restored)
}

/// Backend and downloader as configured by the app's settings.
fn build_services(app: &App) -> anyhow::Result<(GenerationController, Arc<Downloader>)> {
    let controller = GenerationController::new(build_backend(&app.settings)?);
    let fetcher = Arc::new(UriFetcher::new(app.settings.request_timeout())?);
    let downloader = Arc::new(Downloader::new(fetcher, app.settings.resolved_download_dir()));
    Ok((controller, downloader))
}

/// The loop's own error wins; a failed restore is only reported when the
/// loop ended cleanly.
fn finish(result: anyhow::Result<()>, restored: Result<(), TerminalError>) -> anyhow::Result<()> {
    match (result, restored) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(e)) => Err(e.into()),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(restore)) => {
            warn!(error = %restore, "terminal restore failed after event loop error");
            Err(e)
        }
    }
}

fn event_loop(
    terminal: &mut StudioTerminal,
    app: &mut App,
    dispatcher: &Dispatcher,
    rx: &mut UnboundedReceiver<AppEvent>,
) -> anyhow::Result<()> {
    loop {
        while let Ok(event) = rx.try_recv() {
            apply_event(app, event);
        }
        dispatcher.dispatch_all(app);

        terminal.draw(|f| ui::ui(f, app))?;

        if poll(POLL_INTERVAL)? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(app, key)? {
                        break;
                    }
                }
                InputEvent::Resize(_, _) => { /* redraw on next loop */ }
                InputEvent::Other => {}
            }
        }
        app.on_tick();
    }
    Ok(())
}
