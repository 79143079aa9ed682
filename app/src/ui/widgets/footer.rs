use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::errors::render_generation_error;
use crate::ui::colors::current as current_colors;

pub const HELP_LINE: &str = "Enter:generate  Tab:focus  ↑/↓:select  F2:download  F3:clear  F1:help  Esc:quit";

/// Status line: a generation error wins, then the last status, then help.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let line = if let Some(err) = app.session.last_error() {
        Line::from(vec![
            Span::styled(render_generation_error(err), colors.error_style),
            Span::styled("  (F4 to dismiss)", colors.muted_style),
        ])
    } else if let Some(status) = &app.status {
        Line::from(Span::raw(status.as_str()))
    } else {
        Line::from(Span::styled(HELP_LINE, colors.muted_style))
    };
    let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL).style(colors.footer_style));
    f.render_widget(p, area);
}
