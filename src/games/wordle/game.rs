use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::core::renderer::GameRenderer;
use crate::games::wordle::feedback::{self, Feedback};
use crate::games::wordle::renderer::WordleRenderer;
use crate::games::wordle::state::{GameState, Status};
use crate::games::wordle::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::{Context, Game};

/// Timing of the reveal animation.
///
/// Column `i` of a submitted row is revealed after `(i + 1) * animation / 2`
/// and the outcome is announced after `3 * animation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    animation: Duration,
}

impl Pacing {
    pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(500);

    pub fn new(animation: Duration) -> Self {
        Self { animation }
    }

    /// Every notification is delivered without delay
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn reveal_delay(&self, col: usize) -> Duration {
        self.animation * (col as u32 + 1) / 2
    }

    pub fn outcome_delay(&self) -> Duration {
        self.animation * 3
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ANIMATION)
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost { secret: String },
}

impl Outcome {
    pub fn announcement(&self) -> String {
        match self {
            Outcome::Won => "Congratulations!".to_string(),
            Outcome::Lost { secret } => format!("The correct word was: {}", secret),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordleMsg {
    /// Sent after every key press so the grid gets redrawn
    GridUpdated,
    /// Feedback of one cell of a submitted row may now be shown
    Reveal { row: usize, col: usize },
    GameOver(Outcome),
}

/// What a key press asks the state machine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddLetter(char),
    RemoveLetter,
    Submit,
}

impl Command {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Command::AddLetter(c)),
            KeyCode::Backspace => Some(Command::RemoveLetter),
            KeyCode::Enter => Some(Command::Submit),
            _ => None,
        }
    }
}

pub struct WordleGame {
    state: GameState,
    pacing: Pacing,
    /// Number of revealed cells per row
    revealed: [usize; MAX_ATTEMPTS],
    outcome: Option<Outcome>,
    grid_updates: u64,
}

impl WordleGame {
    pub fn new(state: GameState, pacing: Pacing) -> Self {
        Self {
            state,
            pacing,
            revealed: [0; MAX_ATTEMPTS],
            outcome: None,
            grid_updates: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Set once the game-over notification has arrived
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn grid_updates(&self) -> u64 {
        self.grid_updates
    }

    /// Feedback of a cell, once its reveal has played.
    pub fn revealed_feedback(&self, row: usize, col: usize) -> Option<Feedback> {
        if col >= *self.revealed.get(row)? {
            return None;
        }
        self.state.feedback(row).map(|fb| fb[col])
    }

    fn submit(&mut self, ctx: &Context<WordleMsg>) {
        let Some(submission) = self.state.submit_guess() else {
            return;
        };

        info!(
            row = submission.row,
            guess = %submission.guess,
            feedback = %feedback::to_emoji_string(&submission.feedback),
            status = ?submission.status,
            "guess submitted"
        );

        for col in 0..WORD_LENGTH {
            ctx.notify_after(
                self.pacing.reveal_delay(col),
                WordleMsg::Reveal { row: submission.row, col },
            );
        }

        let outcome = match submission.status {
            Status::Won => Outcome::Won,
            Status::Lost => Outcome::Lost { secret: self.state.secret().to_string() },
            Status::AwaitingInput => return,
        };
        ctx.notify_after(self.pacing.outcome_delay(), WordleMsg::GameOver(outcome));
    }
}

impl Game for WordleGame {
    type Message = WordleMsg;

    fn handle_input(&mut self, key: KeyEvent, ctx: &Context<Self::Message>) {
        match Command::from_key(&key) {
            Some(Command::AddLetter(c)) => {
                self.state.add_letter(c);
            }
            Some(Command::RemoveLetter) => {
                self.state.remove_letter();
            }
            // Enter on a partial row is ignored like any other key
            Some(Command::Submit) if self.state.row_full() => self.submit(ctx),
            _ => trace!(code = ?key.code, "key ignored"),
        }

        ctx.notify(WordleMsg::GridUpdated);
    }

    fn handle_message(&mut self, msg: Self::Message, _ctx: &Context<Self::Message>) {
        match msg {
            WordleMsg::GridUpdated => {
                self.grid_updates += 1;
            }
            WordleMsg::Reveal { row, col } => {
                if let Some(count) = self.revealed.get_mut(row) {
                    *count = (*count).max(col + 1);
                }
            }
            WordleMsg::GameOver(outcome) => {
                debug!(?outcome, "game over");
                self.outcome = Some(outcome);
            }
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        WordleRenderer::render(frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pacing_matches_reveal_schedule() {
        let pacing = Pacing::default();
        assert_eq!(pacing.reveal_delay(0), Duration::from_millis(250));
        assert_eq!(pacing.reveal_delay(4), Duration::from_millis(1250));
        assert_eq!(pacing.outcome_delay(), Duration::from_millis(1500));
        assert_eq!(Pacing::instant().outcome_delay(), Duration::ZERO);
    }

    #[test]
    fn key_routing() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(Command::from_key(&key(KeyCode::Char('Q'))), Some(Command::AddLetter('Q')));
        assert_eq!(Command::from_key(&key(KeyCode::Backspace)), Some(Command::RemoveLetter));
        assert_eq!(Command::from_key(&key(KeyCode::Enter)), Some(Command::Submit));
        assert_eq!(Command::from_key(&key(KeyCode::Char('7'))), None);
        assert_eq!(Command::from_key(&key(KeyCode::Tab)), None);
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(Command::from_key(&ctrl_a), None);
    }

    #[test]
    fn announcements() {
        assert_eq!(Outcome::Won.announcement(), "Congratulations!");
        let lost = Outcome::Lost { secret: "crane".into() };
        assert_eq!(lost.announcement(), "The correct word was: crane");
    }
}
