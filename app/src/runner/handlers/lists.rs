use crate::app::settings::keybinds;
use crate::app::{App, Focus};
use crate::input::KeyEvent;

/// Keys while the quick prompt list or the history list has focus.
///
/// Enter copies the highlighted entry into the editor and moves focus back
/// to it, so the next Enter generates. `g` generates straight away.
pub fn handle_list(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    if keybinds::is_down(&key) {
        app.select_next();
    } else if keybinds::is_up(&key) {
        app.select_prev();
    } else if keybinds::is_enter(&key) {
        let picked = match app.focus {
            Focus::QuickPrompts => app.use_quick_prompt(app.quick_selected),
            Focus::History => app.use_history_entry(app.history_selected),
            Focus::Prompt => false,
        };
        if picked {
            app.focus = Focus::Prompt;
        }
    } else if keybinds::typed_char(&key) == Some('g') {
        app.generate();
    } else if keybinds::typed_char(&key) == Some('q') {
        return Ok(true);
    }
    Ok(false)
}
