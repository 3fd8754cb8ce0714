/// The game-state machine: grid editing, guess submission and termination.
///
/// `GameState` knows nothing about keys, timers or drawing. The game glue in
/// `game.rs` routes input into it and schedules notifications from what
/// `submit_guess` returns.
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use super::feedback::{self, FeedbackRow};
use super::{MAX_ATTEMPTS, WORD_LENGTH};

/// Where the state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    AwaitingInput,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::AwaitingInput)
    }
}

/// Result of a successful `submit_guess`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Row the guess was entered on
    pub row: usize,
    pub guess: String,
    pub feedback: FeedbackRow,
    /// Status right after the submission
    pub status: Status,
}

#[derive(Debug, Clone)]
pub struct GameState {
    secret: String,
    grid: [[Option<char>; WORD_LENGTH]; MAX_ATTEMPTS],
    feedback: [Option<FeedbackRow>; MAX_ATTEMPTS],
    current_row: usize,
    current_col: usize,
    status: Status,
}

impl GameState {
    /// Starts a fresh game. The secret must be five ASCII letters; it is
    /// stored lowercase.
    pub fn new(secret: &str) -> Result<Self> {
        let secret = secret.trim().to_ascii_lowercase();
        ensure!(
            secret.len() == WORD_LENGTH && secret.chars().all(|c| c.is_ascii_alphabetic()),
            "secret '{}' is not a {}-letter word",
            secret,
            WORD_LENGTH
        );

        Ok(Self {
            secret,
            grid: [[None; WORD_LENGTH]; MAX_ATTEMPTS],
            feedback: [None; MAX_ATTEMPTS],
            current_row: 0,
            current_col: 0,
            status: Status::AwaitingInput,
        })
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn current_row(&self) -> usize {
        self.current_row
    }

    pub fn current_col(&self) -> usize {
        self.current_col
    }

    pub fn grid(&self) -> &[[Option<char>; WORD_LENGTH]; MAX_ATTEMPTS] {
        &self.grid
    }

    /// Letter at `(row, col)`, `None` for empty or out-of-range cells.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.grid.get(row)?.get(col).copied().flatten()
    }

    /// Feedback of a submitted row.
    pub fn feedback(&self, row: usize) -> Option<&FeedbackRow> {
        self.feedback.get(row)?.as_ref()
    }

    /// Rows submitted so far, including a winning one.
    pub fn attempts(&self) -> usize {
        match self.status {
            Status::Won => self.current_row + 1,
            _ => self.current_row,
        }
    }

    /// True when the current row has all of its letters.
    pub fn row_full(&self) -> bool {
        self.current_col == WORD_LENGTH
    }

    /// Appends a letter to the current row. Returns false (and leaves the
    /// state untouched) when the row is full or the game is over.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if !self.is_active() || self.row_full() {
            return false;
        }
        self.grid[self.current_row][self.current_col] = Some(letter.to_ascii_lowercase());
        self.current_col += 1;
        true
    }

    /// Clears the last letter of the current row.
    pub fn remove_letter(&mut self) -> bool {
        if !self.is_active() || self.current_col == 0 {
            return false;
        }
        self.current_col -= 1;
        self.grid[self.current_row][self.current_col] = None;
        true
    }

    /// Letters of the current row, once it is full.
    pub fn current_guess(&self) -> Option<String> {
        if !self.is_active() || !self.row_full() {
            return None;
        }
        self.grid[self.current_row].iter().copied().collect()
    }

    /// Submits the current row.
    ///
    /// A winning guess leaves `current_row`/`current_col` pointing at the
    /// solved row; any other guess moves to the start of the next row, and
    /// the sixth miss ends the game with `current_row == MAX_ATTEMPTS`.
    pub fn submit_guess(&mut self) -> Option<Submission> {
        let guess = self.current_guess()?;
        let row = self.current_row;
        let feedback = feedback::score(&guess, &self.secret);
        self.feedback[row] = Some(feedback);

        if guess == self.secret {
            self.status = Status::Won;
        } else {
            self.current_row += 1;
            self.current_col = 0;
            if self.current_row == MAX_ATTEMPTS {
                self.status = Status::Lost;
            }
        }

        Some(Submission {
            row,
            guess,
            feedback,
            status: self.status,
        })
    }

    /// Submitted guesses in order, paired with their feedback.
    pub fn history(&self) -> Vec<(String, FeedbackRow)> {
        (0..self.attempts())
            .filter_map(|row| {
                let word: Option<String> = self.grid[row].iter().copied().collect();
                Some((word?, self.feedback[row]?))
            })
            .collect()
    }
}
