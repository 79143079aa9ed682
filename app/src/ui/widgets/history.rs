use ratatui::layout::Rect;
use ratatui::widgets::{List, ListItem, ListState};
use ratatui::Frame;

use super::panel_block;
use crate::app::{App, Focus};
use crate::ui::colors::current as current_colors;

/// Shorten `text` to the first wrapped line of `width` columns, marking
/// anything cut off with an ellipsis.
pub fn fit_line(text: &str, width: usize) -> String {
    let width = width.max(2);
    let lines = textwrap::wrap(text, width - 1);
    match lines.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, ..] => format!("{}…", first),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let focused = app.focus == Focus::History;
    // borders (2) + highlight padding (2)
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .session
        .history()
        .iter()
        .map(|p| ListItem::new(format!("  {}", fit_line(p, width))))
        .collect();
    let list = List::new(items)
        .block(panel_block(" Recent Prompts ", focused, &colors))
        .highlight_style(colors.selected_style);
    let mut state = ListState::default();
    state.select(focused.then_some(app.history_selected));
    f.render_stateful_widget(list, area, &mut state);
}
