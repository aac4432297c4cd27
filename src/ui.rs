pub mod theme;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    app::App,
    session::{SessionState, View},
    stats::Stats,
};

pub use theme::Theme;

/// Prompt characters per line before breaking at the next space
pub const DEFAULT_WRAP_WIDTH: usize = 70;

const QUIT_HINT: &str = "Press ESC to quit";

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

/// Turns a session into styled text for display
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Theme,
    wrap_width: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Theme::default(), DEFAULT_WRAP_WIDTH)
    }
}

impl Renderer {
    pub fn new(theme: Theme, wrap_width: usize) -> Self {
        Self {
            theme,
            wrap_width: wrap_width.max(1),
        }
    }

    pub fn render(&self, session: &SessionState) -> Text<'static> {
        match session.view() {
            View::Prompt => self.render_prompt(session),
            View::Stats => self.render_stats(session),
        }
    }

    fn render_prompt(&self, session: &SessionState) -> Text<'static> {
        let input = session.user_input();
        let width = self.wrap_width;

        let mut lines = vec![
            Line::from(session.seconds_remaining().to_string()),
            Line::default(),
        ];
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut ready_to_break = false;

        for (i, &c) in session.prompt().iter().enumerate() {
            // Wrap points are counted in prompt characters so that
            // styling never moves a line break.
            if i >= width && i % width == 0 {
                ready_to_break = true;
            }

            let style = match input.get(i) {
                Some(&typed) if typed == c => self.theme.correct,
                Some(_) => self.theme.mistake,
                None if i == session.cursor() => self.theme.cursor,
                None => self.theme.untyped,
            };
            push_char(&mut spans, c, style);

            if ready_to_break && c == ' ' {
                lines.push(Line::from(std::mem::take(&mut spans)));
                ready_to_break = false;
            }
        }

        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
        lines.push(Line::from(QUIT_HINT));

        Text::from(lines)
    }

    fn render_stats(&self, session: &SessionState) -> Text<'static> {
        let mut lines = vec![Line::default()];
        lines.extend(stats_lines(session).into_iter().map(Line::from));
        lines.push(Line::default());

        Text::from(lines)
    }

    /// Unstyled statistics, for printing once the terminal has been restored
    pub fn stats_summary(&self, session: &SessionState) -> String {
        stats_lines(session).join("\n")
    }
}

fn stats_lines(session: &SessionState) -> Vec<String> {
    let stats = Stats::compute(
        session.chars_typed(),
        session.mistakes(),
        session.time_passed(),
    );

    vec![
        format!("WPM: {:.2}", stats.wpm),
        format!("Raw: {:.2}", stats.raw_wpm),
        format!(
            "Accuracy: {:.2}% (Correct: {} | Incorrect: {})",
            stats.accuracy, stats.correct, stats.incorrect
        ),
    ]
}

/// Append to the last span when the style matches, otherwise start a new one
fn push_char(spans: &mut Vec<Span<'static>>, c: char, style: Style) {
    match spans.last_mut() {
        Some(last) if last.style == style => last.content.to_mut().push(c),
        _ => spans.push(Span::styled(c.to_string(), style)),
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([Constraint::Min(1)])
            .split(area);

        Paragraph::new(self.view())
            .wrap(Wrap { trim: false })
            .render(chunks[0], buf);
    }
}
