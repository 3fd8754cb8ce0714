use std::path::PathBuf;

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dictionary::WordSource;
use crate::games::wordle::Pacing;

/// What to print once the game screen closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SummaryFormat {
    None,
    /// Emoji rows plus the colored guesses
    #[default]
    Share,
    Json,
}

/// Runtime settings, built from the command line
#[derive(Debug, Clone)]
pub struct Config {
    pub source: WordSource,
    pub pacing: Pacing,
    pub seed: Option<u64>,
    pub summary: SummaryFormat,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    /// Seeded when `seed` is set, from the OS otherwise
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: WordSource::Embedded,
            pacing: Pacing::default(),
            seed: None,
            summary: SummaryFormat::default(),
            log_file: None,
            verbose: false,
        }
    }
}
