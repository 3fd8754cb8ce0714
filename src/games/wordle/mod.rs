/// Wordle game module
pub mod feedback;
pub mod game;
pub mod renderer;
pub mod state;
pub mod summary;

/// Letters per word
pub const WORD_LENGTH: usize = 5;
/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

pub use feedback::{score, Feedback, FeedbackRow};
pub use game::{Command, Outcome, Pacing, WordleGame, WordleMsg};
pub use renderer::WordleRenderer;
pub use state::{GameState, Status, Submission};
pub use summary::GameSummary;
