use ratatui::style::{Color, Style};

#[derive(Clone, Debug, PartialEq)]
pub struct Theme { pub bg: Color, pub fg: Color, pub accent: Color, pub muted: Color, pub error: Color }

impl Theme {
    pub fn dark() -> Self { Self{ bg: Color::Rgb(11,12,13), fg: Color::Gray, accent: Color::Cyan, muted: Color::DarkGray, error: Color::LightRed } }
    pub fn light() -> Self { Self{ bg: Color::White, fg: Color::Black, accent: Color::Blue, muted: Color::Gray, error: Color::Red } }
    pub fn style_fg(&self) -> Style { Style::default().fg(self.fg).bg(self.bg) }

    /// Look a theme up by name; unknown names fall back to dark.
    pub fn by_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}
