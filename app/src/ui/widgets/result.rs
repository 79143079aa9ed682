use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::panel_block;
use crate::app::{App, ResultView};
use crate::ui::colors::current as current_colors;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}

/// Result pane: idle placeholder, busy spinner or the generated reference.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let lines: Vec<Line> = match app.session.view() {
        ResultView::Idle => vec![
            Line::from(""),
            Line::from(Span::styled("Your image will appear here.", colors.muted_style)),
            Line::from(Span::styled("Type a prompt and press Enter to generate.", colors.muted_style)),
        ],
        ResultView::Busy => vec![
            Line::from(""),
            Line::from(Span::styled(spinner_frame(app.tick), colors.title_style)),
            Line::from("Creating your masterpiece..."),
        ],
        ResultView::Populated(artifact) => vec![
            Line::from(""),
            Line::from(Span::styled(artifact.as_str(), colors.focused_border_style)),
            Line::from(""),
            Line::from(Span::styled("F2: download", colors.muted_style)),
        ],
    };
    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel_block(" Generated Image ", false, &colors));
    f.render_widget(p, area);
}
