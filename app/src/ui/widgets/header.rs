use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::colors::current as current_colors;

pub const TITLE: &str = "AI Image Studio";
pub const TAGLINE: &str = "Transform your imagination into stunning visuals with AI magic";

pub fn render(f: &mut Frame, area: Rect) {
    let colors = current_colors();
    let line = Line::from(vec![
        Span::styled(format!("✦ {} ", TITLE), colors.title_style),
        Span::styled(format!("· {}", TAGLINE), colors.muted_style),
    ]);
    let p = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(colors.block_style));
    f.render_widget(p, area);
}
