use ratatui::layout::Rect;
use ratatui::widgets::{List, ListItem, ListState};
use ratatui::Frame;

use super::panel_block;
use crate::app::{App, Focus};
use crate::generation::catalog::QUICK_PROMPTS;
use crate::ui::colors::current as current_colors;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let focused = app.focus == Focus::QuickPrompts;
    let items: Vec<ListItem> = QUICK_PROMPTS.iter().map(|p| ListItem::new(format!("  {}", p))).collect();
    let list = List::new(items)
        .block(panel_block(" Quick Prompts ", focused, &colors))
        .highlight_style(colors.selected_style);
    let mut state = ListState::default();
    // Only show the cursor while the list is being navigated.
    state.select(focused.then_some(app.quick_selected));
    f.render_stateful_widget(list, area, &mut state);
}
