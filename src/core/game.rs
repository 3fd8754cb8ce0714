/// Core game interface for the termle framework
use std::time::Duration;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc::UnboundedSender;

/// Handle a game uses to notify the engine loop.
///
/// Messages come back to the same game through `Game::handle_message`, either
/// right away or after a delay.
pub struct Context<M> {
    tx: UnboundedSender<M>,
}

impl<M: Send + 'static> Context<M> {
    pub fn new(tx: UnboundedSender<M>) -> Self {
        Self { tx }
    }

    /// Queue a message for the next loop iteration
    pub fn notify(&self, msg: M) {
        // The receiver only goes away once the engine has stopped
        let _ = self.tx.send(msg);
    }

    /// Queue a message after `delay`. A zero delay behaves like `notify`, so
    /// no timer (and no runtime) is needed.
    pub fn notify_after(&self, delay: Duration, msg: M) {
        if delay.is_zero() {
            self.notify(msg);
            return;
        }

        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(msg);
        });
    }
}

/// Main game trait that all games must implement
pub trait Game {
    /// Notifications the game schedules for itself
    type Message: Send + 'static;

    /// How often `on_tick` runs. Turn-based games don't need a tick.
    fn tick_rate(&self) -> Option<Duration> {
        None
    }

    fn on_tick(&mut self, _dt: u32, _ctx: &Context<Self::Message>) {}

    /// A key press that is not one of the engine's quit keys
    fn handle_input(&mut self, key: KeyEvent, ctx: &Context<Self::Message>);

    /// A message previously queued through the context
    fn handle_message(&mut self, msg: Self::Message, ctx: &Context<Self::Message>);

    fn render(&self, frame: &mut ratatui::Frame);
}
