use ratatui::style::{Color, Style};

/// Styles used to tag each prompt character while a test runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Typed and matching
    pub correct: Style,
    /// Typed and not matching
    pub mistake: Style,
    /// Next character to type
    pub cursor: Style,
    /// Not reached yet
    pub untyped: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            correct: Style::default(),
            mistake: Style::default().bg(Color::Rgb(0xff, 0x00, 0x00)),
            cursor: Style::default()
                .bg(Color::Rgb(0xe2, 0xb7, 0x14))
                .fg(Color::Rgb(0x00, 0x00, 0x00)),
            untyped: Style::default().fg(Color::Rgb(0x99, 0x99, 0x99)),
        }
    }
}
