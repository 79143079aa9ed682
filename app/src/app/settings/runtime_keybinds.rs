//! Process-wide key binding table.
//!
//! Handlers never match raw keys; they ask `keybinds::is_*` which consults
//! the table installed here. The table starts with the built-in defaults and
//! may be replaced once at startup from the `[keybinds]` settings section.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use once_cell::sync::Lazy;
use tracing::warn;

use crate::input::{KeyCode, KeyEvent, KeyModifiers};

/// A key plus the modifiers that must be held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn plain(code: KeyCode) -> Self {
        KeyBinding { code, modifiers: KeyModifiers::NONE }
    }

    pub const fn ctrl(c: char) -> Self {
        KeyBinding { code: KeyCode::Char(c), modifiers: KeyModifiers::CONTROL }
    }

    /// SHIFT is ignored: it is already folded into the character (or into
    /// `BackTab`) by the terminal.
    pub fn matches(&self, ev: &KeyEvent) -> bool {
        let mods = ev.modifiers - KeyModifiers::SHIFT;
        let code = match ev.code {
            KeyCode::Char(c) if mods.contains(KeyModifiers::CONTROL) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.code == code && self.modifiers == mods
    }
}

pub const ACTIONS: [&str; 11] = [
    "quit",
    "enter",
    "download",
    "help",
    "dismiss",
    "clear",
    "next_focus",
    "prev_focus",
    "up",
    "down",
    "backspace",
];

#[derive(Clone, Debug)]
pub struct Keybinds {
    map: HashMap<&'static str, Vec<KeyBinding>>,
}

impl Default for Keybinds {
    fn default() -> Self {
        use KeyBinding as B;
        let mut map = HashMap::new();
        map.insert("quit", vec![B::plain(KeyCode::Esc), B::ctrl('c')]);
        map.insert("enter", vec![B::plain(KeyCode::Enter)]);
        map.insert("download", vec![B::plain(KeyCode::F(2)), B::ctrl('s')]);
        map.insert("help", vec![B::plain(KeyCode::F(1))]);
        map.insert("dismiss", vec![B::plain(KeyCode::F(4))]);
        map.insert("clear", vec![B::plain(KeyCode::F(3)), B::ctrl('u')]);
        map.insert("next_focus", vec![B::plain(KeyCode::Tab)]);
        map.insert("prev_focus", vec![B::plain(KeyCode::BackTab)]);
        map.insert("up", vec![B::plain(KeyCode::Up)]);
        map.insert("down", vec![B::plain(KeyCode::Down)]);
        map.insert("backspace", vec![B::plain(KeyCode::Backspace)]);
        Keybinds { map }
    }
}

impl Keybinds {
    pub fn is_bound(&self, action: &str, ev: &KeyEvent) -> bool {
        self.map
            .get(action)
            .is_some_and(|binds| binds.iter().any(|b| b.matches(ev)))
    }

    pub fn bindings(&self, action: &str) -> &[KeyBinding] {
        self.map.get(action).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Defaults with the given actions replaced. Unknown actions and
    /// unparsable keys are logged and skipped.
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Self {
        let mut kb = Keybinds::default();
        for (action, keys) in overrides {
            let Some(name) = ACTIONS.iter().copied().find(|a| *a == action.as_str()) else {
                warn!(action = %action, "ignoring keybinding for unknown action");
                continue;
            };
            let parsed: Vec<KeyBinding> = keys
                .iter()
                .filter_map(|k| {
                    let b = parse_binding(k);
                    if b.is_none() {
                        warn!(action = %action, key = %k, "ignoring unparsable key");
                    }
                    b
                })
                .collect();
            if !parsed.is_empty() {
                kb.map.insert(name, parsed);
            }
        }
        kb
    }
}

/// Parse `"Enter"`, `"F5"`, `"x"`, `"Ctrl-s"` and friends.
pub fn parse_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();
    let lower = s.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("ctrl-").or_else(|| lower.strip_prefix("ctrl+")) {
        let mut chars = rest.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeyBinding::ctrl(c)),
            _ => None,
        };
    }
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" | "shift-tab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse::<u8>().ok().filter(|n| (1..=12).contains(n))?),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyBinding::plain(code))
}

static BINDINGS: Lazy<RwLock<Keybinds>> = Lazy::new(|| RwLock::new(Keybinds::default()));

pub fn get() -> RwLockReadGuard<'static, Keybinds> {
    BINDINGS.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn set(kb: Keybinds) {
    *BINDINGS.write().unwrap_or_else(PoisonError::into_inner) = kb;
}
