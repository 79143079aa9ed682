pub mod footer;
pub mod header;
pub mod history;
pub mod prompt;
pub mod quick_prompts;
pub mod result;
pub mod tips;

use ratatui::widgets::{Block, Borders};

use crate::ui::colors::Colors;

/// Bordered block shared by every pane; the border lights up when focused.
pub(crate) fn panel_block<'a>(title: &'a str, focused: bool, colors: &Colors) -> Block<'a> {
    let border = if focused { colors.focused_border_style } else { colors.block_style };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(colors.title_style)
        .border_style(border)
        .style(colors.block_style)
}
