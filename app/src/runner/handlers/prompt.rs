use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::KeyEvent;

/// Keys while the prompt editor has focus. Printable characters are text.
pub fn handle_prompt(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    if keybinds::is_enter(&key) {
        app.generate();
    } else if keybinds::is_backspace(&key) {
        app.session.backspace();
    } else if keybinds::is_clear(&key) {
        app.session.clear_prompt();
    } else if let Some(c) = keybinds::typed_char(&key) {
        app.session.insert_char(c);
    }
    Ok(false)
}
