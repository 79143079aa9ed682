use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::KeyEvent;

/// Any dialog (help or message) closes on Enter, Esc or the help key.
/// Quit keys do not quit from inside a dialog.
pub fn handle_dialog(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    if keybinds::is_enter(&key) || keybinds::is_quit(&key) || keybinds::is_help(&key) {
        app.mode = Mode::Normal;
    }
    Ok(false)
}
