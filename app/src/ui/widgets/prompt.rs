use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::panel_block;
use super::result::spinner_frame;
use crate::app::{App, Focus, Mode};
use crate::ui::colors::current as current_colors;

pub const PLACEHOLDER: &str = "Describe what you want to see... Be creative and detailed!";

/// The editable prompt. A bar marks the insertion point while focused.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let focused = app.focus == Focus::Prompt && app.mode == Mode::Normal;
    let prompt = app.session.prompt();

    let mut spans = Vec::new();
    if prompt.is_empty() && !focused {
        spans.push(Span::styled(PLACEHOLDER, colors.muted_style));
    } else {
        spans.push(Span::raw(prompt));
        if focused {
            spans.push(Span::styled("▏", colors.focused_border_style));
        }
        if prompt.is_empty() {
            spans.push(Span::styled(PLACEHOLDER, colors.muted_style));
        }
    }

    let p = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(panel_block(" Create Your Vision ", focused, &colors));
    f.render_widget(p, area);
}

/// One-line "button" reflecting whether Enter would generate right now.
pub fn render_button(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let (label, style) = if app.session.is_generating() {
        (format!(" {} Generating Magic... ", spinner_frame(app.tick)), colors.button_disabled_style)
    } else if app.session.can_generate() {
        (" ⚡ Generate Image [Enter] ".to_string(), colors.button_style)
    } else {
        (" ⚡ Generate Image ".to_string(), colors.button_disabled_style)
    };
    let p = Paragraph::new(Line::from(Span::styled(label, style))).alignment(Alignment::Center);
    f.render_widget(p, area);
}
