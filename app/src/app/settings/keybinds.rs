// Centralised keybind predicates for the application.
//
// Handlers refer to actions through these helpers instead of raw key
// patterns, so user overrides from `settings.toml` apply everywhere.

use crate::app::settings::runtime_keybinds;
use crate::input::{KeyCode, KeyEvent, KeyModifiers};

fn is_bound(action: &str, ev: &KeyEvent) -> bool {
	runtime_keybinds::get().is_bound(action, ev)
}

pub fn is_quit(ev: &KeyEvent) -> bool {
	is_bound("quit", ev)
}

pub fn is_enter(ev: &KeyEvent) -> bool {
	is_bound("enter", ev)
}

pub fn is_download(ev: &KeyEvent) -> bool {
	is_bound("download", ev)
}

pub fn is_help(ev: &KeyEvent) -> bool {
	is_bound("help", ev)
}

pub fn is_dismiss(ev: &KeyEvent) -> bool {
	is_bound("dismiss", ev)
}

pub fn is_clear(ev: &KeyEvent) -> bool {
	is_bound("clear", ev)
}

pub fn is_next_focus(ev: &KeyEvent) -> bool {
	is_bound("next_focus", ev)
}

pub fn is_prev_focus(ev: &KeyEvent) -> bool {
	is_bound("prev_focus", ev)
}

pub fn is_up(ev: &KeyEvent) -> bool {
	is_bound("up", ev)
}

pub fn is_down(ev: &KeyEvent) -> bool {
	is_bound("down", ev)
}

pub fn is_backspace(ev: &KeyEvent) -> bool {
	is_bound("backspace", ev)
}

/// Printable character typed without Ctrl/Alt, i.e. text for the editor.
pub fn typed_char(ev: &KeyEvent) -> Option<char> {
	match ev.code {
		KeyCode::Char(c) if !ev.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(c),
		_ => None,
	}
}
