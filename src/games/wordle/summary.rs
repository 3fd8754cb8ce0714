/// End-of-game summary, printed after the terminal is restored.
use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::wordle::feedback::{self, Feedback, FeedbackRow};
use crate::games::wordle::state::{GameState, Status};
use crate::games::wordle::MAX_ATTEMPTS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessRecord {
    pub guess: String,
    pub feedback: FeedbackRow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub secret: String,
    pub status: Status,
    pub attempts: usize,
    pub guesses: Vec<GuessRecord>,
}

impl GameSummary {
    pub fn from_state(state: &GameState) -> Self {
        let guesses = state
            .history()
            .into_iter()
            .map(|(guess, feedback)| GuessRecord { guess, feedback })
            .collect();

        Self {
            secret: state.secret().to_string(),
            status: state.status(),
            attempts: state.attempts(),
            guesses,
        }
    }

    /// `termle 3/6` for a win, `termle X/6` otherwise.
    pub fn score_line(&self) -> String {
        match self.status {
            Status::Won => format!("termle {}/{}", self.attempts, MAX_ATTEMPTS),
            _ => format!("termle X/{}", MAX_ATTEMPTS),
        }
    }

    /// Spoiler-free result: the score line and one emoji row per guess.
    pub fn share_text(&self) -> String {
        let mut text = self.score_line();
        text.push('\n');
        for record in &self.guesses {
            text.push('\n');
            text.push_str(&feedback::to_emoji_string(&record.feedback));
        }
        text
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Prints the share text plus the guesses with colored letters.
    pub fn print<W: Write>(&self, term: &mut TerminalContext<W>) -> io::Result<()> {
        for line in self.share_text().lines() {
            term.print_line(line)?;
        }
        term.empty_line()?;

        for record in &self.guesses {
            for (letter, fb) in record.guess.chars().zip(record.feedback) {
                term.print_colored(&letter.to_ascii_uppercase().to_string(), color_of(fb))?;
            }
            term.empty_line()?;
        }

        if self.status != Status::Won {
            term.print_line(&format!("The word was: {}", self.secret))?;
        }
        term.flush()
    }
}

fn color_of(feedback: Feedback) -> TerminalColor {
    match feedback {
        Feedback::Correct => TerminalColor::Green,
        Feedback::Present => TerminalColor::Yellow,
        Feedback::Absent => TerminalColor::DarkGrey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(secret: &str, guesses: &[&str]) -> GameSummary {
        let mut state = GameState::new(secret).unwrap();
        for guess in guesses {
            for c in guess.chars() {
                state.add_letter(c);
            }
            state.submit_guess();
        }
        GameSummary::from_state(&state)
    }

    #[test]
    fn share_text_for_a_win() {
        let summary = played("crane", &["crate", "crane"]);
        assert_eq!(summary.share_text(), "termle 2/6\n\n🟩🟩🟩⬛🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn unfinished_game_scores_x() {
        let summary = played("crane", &["slate"]);
        assert_eq!(summary.status, Status::AwaitingInput);
        assert_eq!(summary.score_line(), "termle X/6");
    }

    #[test]
    fn json_fields() {
        let json = played("crane", &["crane"]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["secret"], "crane");
        assert_eq!(value["status"], "won");
        assert_eq!(value["attempts"], 1);
        assert_eq!(value["guesses"][0]["feedback"][0], "correct");
    }

    #[test]
    fn print_reveals_secret_after_a_loss() {
        let summary = played("crane", &["slate"; MAX_ATTEMPTS]);
        let mut term = TerminalContext::new(Vec::new());
        summary.print(&mut term).unwrap();
        let out = String::from_utf8(term.into_inner()).unwrap();
        assert!(out.starts_with("termle X/6\n"));
        assert!(out.contains("The word was: crane"));
    }
}
