use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, MessageKind, Mode};

pub mod colors;
pub mod dialogs;
pub mod themes;
pub mod widgets;

pub use themes::Theme;

/// Below this width the sidebar moves under the main column.
const NARROW_WIDTH: u16 = 90;

pub fn ui(f: &mut Frame, app: &App) {
    // header (3), body (min), footer (3)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    widgets::header::render(f, chunks[0]);
    let (main, side) = split_body(chunks[1]);

    // prompt (5), quick prompts (7), generate button (1), result (min)
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(main);
    widgets::prompt::render(f, left[0], app);
    widgets::quick_prompts::render(f, left[1], app);
    widgets::prompt::render_button(f, left[2], app);
    widgets::result::render(f, left[3], app);

    // Recent prompts only appear once something was generated.
    if app.session.history().is_empty() {
        widgets::tips::render(f, side);
    } else {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(side);
        widgets::history::render(f, right[0], app);
        widgets::tips::render(f, right[1]);
    }

    widgets::footer::render(f, chunks[2], app);

    // Modal
    match &app.mode {
        Mode::Help => dialogs::draw_help(f, f.area()),
        Mode::Message { kind: MessageKind::Error, title, content } => dialogs::draw_error(f, f.area(), title, content),
        Mode::Message { kind: MessageKind::Info, title, content } => dialogs::draw_info(f, f.area(), title, content),
        Mode::Normal => {}
    }
}

fn split_body(area: Rect) -> (Rect, Rect) {
    if area.width < NARROW_WIDTH {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);
        (parts[0], parts[1])
    } else {
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
            .split(area);
        (parts[0], parts[1])
    }
}
