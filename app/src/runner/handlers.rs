//! Split handlers: thin wrapper delegating to submodules per focus/mode.

pub mod dialog;
pub mod lists;
pub mod prompt;

pub use dialog::handle_dialog;
pub use lists::handle_list;
pub use prompt::handle_prompt;

use crate::app::settings::keybinds;
use crate::app::{App, Focus, Mode};
use crate::input::KeyEvent;

/// Top-level key handler. Returns `Ok(true)` when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    if app.mode != Mode::Normal {
        return handle_dialog(app, key);
    }

    // Keys that mean the same thing whatever has focus.
    if keybinds::is_quit(&key) {
        return Ok(true);
    }
    if keybinds::is_help(&key) {
        app.mode = Mode::Help;
        return Ok(false);
    }
    if keybinds::is_download(&key) {
        app.download();
        return Ok(false);
    }
    if keybinds::is_dismiss(&key) {
        app.session.dismiss_error();
        app.status = None;
        return Ok(false);
    }
    if keybinds::is_next_focus(&key) {
        app.focus_next();
        return Ok(false);
    }
    if keybinds::is_prev_focus(&key) {
        app.focus_prev();
        return Ok(false);
    }

    match app.focus {
        Focus::Prompt => handle_prompt(app, key),
        Focus::QuickPrompts | Focus::History => handle_list(app, key),
    }
}
