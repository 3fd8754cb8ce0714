use crate::core::input::{InputEvent, InputSource};
use crate::{Context, Game};
use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use tracing::debug;

/// Idle wake-up for games without a tick, so input keeps getting polled
const IDLE_SLEEP: Duration = Duration::from_millis(16);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Runs until a quit key is pressed or the input source closes, and hands
    /// the game back so the caller can inspect how it ended.
    pub async fn run<B, I>(mut self, terminal: &mut Terminal<B>, mut input: I) -> Result<G>
    where
        B: Backend,
        I: InputSource,
    {
        let mut last_tick = Instant::now();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<G::Message>();
        let ctx = Context::new(tx);
        let mut dirty = true;

        loop {
            // Only redraw once something changed
            if dirty {
                terminal
                    .draw(|f| self.game.render(f))
                    .map_err(|e| anyhow!("failed to draw frame: {e}"))?;
                dirty = false;
            }

            // INPUT (non-blocking)
            match input.next_event()? {
                InputEvent::Key(key) if is_quit_key(&key) => {
                    debug!(code = ?key.code, "quit requested");
                    break;
                }
                InputEvent::Key(key) => self.game.handle_input(key, &ctx),
                InputEvent::Resize => dirty = true,
                InputEvent::Closed => break,
                InputEvent::Idle => {}
            }

            let tick_rate = self.game.tick_rate();
            let tick_sleep = tick_rate.unwrap_or(IDLE_SLEEP);

            tokio::select! {
                // Notifications the game queued, immediate or deferred
                Some(msg) = rx.recv() => {
                    self.game.handle_message(msg, &ctx);
                    dirty = true;
                }

                // Game heartbeat
                _ = tokio::time::sleep(tick_sleep) => {
                    if tick_rate.is_some() {
                        let dt = last_tick.elapsed().as_millis() as u32;
                        last_tick = Instant::now();
                        self.game.on_tick(dt, &ctx);
                        dirty = true;
                    }
                }
            }
        }

        // Deliver whatever is already queued; pending timers are dropped
        while let Ok(msg) = rx.try_recv() {
            self.game.handle_message(msg, &ctx);
        }

        Ok(self.game)
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
