use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::colors::current as current_colors;

pub const HELP_TEXT: &str = "\
Enter       generate (prompt) / use highlighted entry (lists)
Tab         next pane        Shift-Tab  previous pane
Up / Down   move in quick prompts or recent prompts
g           generate from a list pane
F2 / Ctrl-S download the generated image
F3 / Ctrl-U clear the prompt
F4          dismiss the last error
F1          this help
Esc / Ctrl-C quit";

/// Rectangle of `percent_x` by `percent_y` centred inside `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn draw_dialog(f: &mut Frame, area: Rect, title: &str, content: &str, border: Style) {
    let colors = current_colors();
    let rect = centered_rect(60, 50, area);
    let mut lines: Vec<Line> = content.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from("[ OK ]").style(colors.button_style).alignment(Alignment::Center));
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .border_style(border)
                .style(colors.block_style),
        );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

pub fn draw_info(f: &mut Frame, area: Rect, title: &str, content: &str) {
    draw_dialog(f, area, title, content, current_colors().focused_border_style);
}

pub fn draw_error(f: &mut Frame, area: Rect, title: &str, content: &str) {
    draw_dialog(f, area, title, content, current_colors().error_style);
}

pub fn draw_help(f: &mut Frame, area: Rect) {
    draw_info(f, area, "Help", HELP_TEXT);
}
