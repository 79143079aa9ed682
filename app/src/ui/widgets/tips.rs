use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::panel_block;
use crate::generation::catalog::PRO_TIPS;
use crate::ui::colors::current as current_colors;

pub fn render(f: &mut Frame, area: Rect) {
    let colors = current_colors();
    let lines: Vec<Line> = PRO_TIPS
        .iter()
        .map(|tip| Line::from(vec![Span::styled("• ", colors.focused_border_style), Span::raw(*tip)]))
        .collect();
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel_block(" Pro Tips ", false, &colors));
    f.render_widget(p, area);
}
