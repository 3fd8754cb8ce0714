/// Key input sources for the engine loop
use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub enum InputEvent {
    Key(KeyEvent),
    /// The terminal changed size; the screen must be redrawn
    Resize,
    /// Nothing pending right now
    Idle,
    /// The source is exhausted; the engine stops
    Closed,
}

pub trait InputSource {
    fn next_event(&mut self) -> Result<InputEvent>;
}

/// Reads the real keyboard through crossterm without blocking
#[derive(Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn next_event(&mut self) -> Result<InputEvent> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(InputEvent::Idle);
        }
        match event::read()? {
            // Windows also reports releases
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(InputEvent::Key(key)),
            Event::Resize(..) => Ok(InputEvent::Resize),
            _ => Ok(InputEvent::Idle),
        }
    }
}

/// Replays a fixed list of events, then closes. Used to drive the engine headless.
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self::from_events(keys.into_iter().map(InputEvent::Key))
    }

    pub fn from_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self { events: events.into_iter().collect() }
    }

    /// One key per character; `\n` is Enter and `\u{8}` is Backspace.
    pub fn from_text(text: &str) -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        Self::new(text.chars().map(|c| {
            let code = match c {
                '\n' => KeyCode::Enter,
                '\u{8}' => KeyCode::Backspace,
                c => KeyCode::Char(c),
            };
            KeyEvent::new(code, KeyModifiers::NONE)
        }))
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> Result<InputEvent> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::Closed))
    }
}
