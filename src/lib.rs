pub mod core {
	pub mod engine;
	pub mod game;
	pub mod input;
	pub mod renderer;
	pub mod terminal;
}

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod games;

// Re-export for convenience
pub use crate::core::game::{Context, Game};
