use once_cell::sync::Lazy;
use ratatui::style::{Modifier, Style};
use std::sync::{PoisonError, RwLock};

use crate::ui::themes::Theme;

/// Concrete styles derived from the active `Theme`.
#[derive(Clone, Debug)]
pub struct Colors {
	pub block_style: Style,
	pub focused_border_style: Style,
	pub title_style: Style,
	pub selected_style: Style,
	pub muted_style: Style,
	pub error_style: Style,
	pub button_style: Style,
	pub button_disabled_style: Style,
	pub footer_style: Style,
}

impl From<&Theme> for Colors {
	fn from(theme: &Theme) -> Self {
		let base = theme.style_fg();
		Colors {
			block_style: base,
			focused_border_style: base.fg(theme.accent),
			title_style: base.fg(theme.accent).add_modifier(Modifier::BOLD),
			selected_style: Style::default().fg(theme.bg).bg(theme.accent),
			muted_style: base.fg(theme.muted),
			error_style: base.fg(theme.error).add_modifier(Modifier::BOLD),
			button_style: Style::default().fg(theme.bg).bg(theme.accent).add_modifier(Modifier::BOLD),
			button_disabled_style: base.fg(theme.muted),
			footer_style: base,
		}
	}
}

static CURRENT: Lazy<RwLock<Colors>> = Lazy::new(|| RwLock::new(Colors::from(&Theme::dark())));

pub fn set_theme(name: &str) {
	set_from_theme(&Theme::by_name(name));
}

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(theme: &Theme) {
	*CURRENT.write().unwrap_or_else(PoisonError::into_inner) = Colors::from(theme);
}

pub fn current() -> Colors {
	CURRENT.read().unwrap_or_else(PoisonError::into_inner).clone()
}
