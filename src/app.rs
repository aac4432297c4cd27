//! Glue between the terminal runtime and the typing session.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::text::Text;

use crate::{
    runtime::AppEvent,
    session::{Command, Event, Key, SessionState, View},
    ui::Renderer,
};

#[derive(Debug)]
pub struct App {
    session: SessionState,
    renderer: Renderer,
}

impl App {
    pub fn new(session: SessionState, renderer: Renderer) -> Self {
        Self { session, renderer }
    }

    /// Command to run before the first event; starts the clock
    pub fn init(&self) -> Command {
        Command::Tick
    }

    pub fn dispatch(&mut self, event: &AppEvent) -> Command {
        let Some(event) = translate(event) else {
            return Command::None;
        };

        let before = self.session.state();
        let command = self.session.handle(&event);
        if self.session.state() != before {
            tracing::debug!(from = ?before, to = ?self.session.state(), "session state changed");
        }

        command
    }

    pub fn view(&self) -> Text<'static> {
        self.renderer.render(&self.session)
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Plain-text results, if the test ran to completion
    pub fn summary(&self) -> Option<String> {
        (self.session.view() == View::Stats).then(|| self.renderer.stats_summary(&self.session))
    }
}

/// Map a runtime event to a session event. Resizes and key releases only
/// need a redraw, so they have no session counterpart.
pub fn translate(event: &AppEvent) -> Option<Event> {
    match event {
        AppEvent::Tick(at) => {
            tracing::trace!(?at, "tick");
            Some(Event::Tick)
        }
        AppEvent::Paste(text) => Some(Event::Key(Key::Chars(text.chars().collect()))),
        AppEvent::Resize => None,
        AppEvent::Key(key) => translate_key(key).map(Event::Key),
    }
}

fn translate_key(key: &KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let key = match key.code {
        KeyCode::Esc => Key::Cancel,
        KeyCode::Char('c') if ctrl => Key::Cancel,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(_) if ctrl => Key::Chars(Vec::new()),
        KeyCode::Char(c) => Key::Chars(vec![c]),
        // Keys without text are empty input
        _ => Key::Chars(Vec::new()),
    };

    Some(key)
}
