/// Per-letter feedback for a submitted guess.
///
/// Every position is classified on its own: a letter that appears once in the
/// secret but twice in the guess is `Present` (or `Correct`) both times. There
/// is no duplicate-count budgeting.
use serde::{Deserialize, Serialize};

use super::WORD_LENGTH;

/// Classification of a single guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// Right letter, right position (green)
    Correct,
    /// Letter occurs somewhere else in the secret (yellow)
    Present,
    /// Letter does not occur in the secret (gray)
    Absent,
}

impl Feedback {
    pub fn to_emoji(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }
}

/// Feedback for a whole row.
pub type FeedbackRow = [Feedback; WORD_LENGTH];

/// Scores `guess` against `secret`, one position at a time.
///
/// Both words are expected to hold `WORD_LENGTH` letters; positions past the
/// end of either word are reported as `Absent`.
pub fn score(guess: &str, secret: &str) -> FeedbackRow {
    let secret: Vec<char> = secret.chars().collect();
    let mut row = [Feedback::Absent; WORD_LENGTH];

    for (i, letter) in guess.chars().take(WORD_LENGTH).enumerate() {
        row[i] = if secret.get(i) == Some(&letter) {
            Feedback::Correct
        } else if secret.contains(&letter) {
            Feedback::Present
        } else {
            Feedback::Absent
        };
    }

    row
}

/// True when every position is `Correct`.
pub fn is_solved(row: &FeedbackRow) -> bool {
    row.iter().all(|f| *f == Feedback::Correct)
}

/// Renders a row as emoji squares, e.g. `🟩🟨⬛⬛🟩`.
pub fn to_emoji_string(row: &FeedbackRow) -> String {
    row.iter().map(|f| f.to_emoji()).collect()
}
