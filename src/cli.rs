use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, bail, Context as _, Result};
use clap::Parser;
use tracing::{debug, info, Level};

use crate::config::{Config, SummaryFormat};
use crate::core::engine::Engine;
use crate::core::input::CrosstermInput;
use crate::core::terminal::TerminalContext;
use crate::dictionary::{Dictionary, WordSource};
use crate::games::wordle::{GameState, GameSummary, Pacing, WordleGame};

#[derive(Parser, Debug)]
#[command(name = "termle")]
#[command(about = "🟩 Guess the hidden five-letter word in six tries")]
#[command(version)]
pub struct Cli {
    /// Word list, one word per line (defaults to the built-in list)
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Length of the reveal animation in milliseconds; 0 disables it
    #[arg(short, long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Seed for picking the secret word
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level (includes the secret word)
    #[arg(short, long)]
    pub verbose: bool,

    /// What to print after the game
    #[arg(short, long, value_enum, default_value_t = SummaryFormat::Share)]
    pub summary: SummaryFormat,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            source: self.words.map_or(WordSource::Embedded, WordSource::File),
            pacing: Pacing::new(Duration::from_millis(self.delay_ms)),
            seed: self.seed,
            summary: self.summary,
            log_file: self.log_file,
            verbose: self.verbose,
        }
    }
}

pub async fn run_cli() -> Result<()> {
    let config = Cli::parse().into_config();
    init_logging(&config)?;
    run(config).await
}

/// The terminal is taken over while playing, so logs only go to a file.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let level = if config.verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

/// Builds a game from `config`, plays it on the real terminal, then prints
/// the summary.
pub async fn run(config: Config) -> Result<()> {
    let dictionary = Dictionary::load(&config.source).await;
    if dictionary.is_empty() {
        bail!("Failed to load words. Please try again.");
    }

    let game = new_game(&dictionary, &config)?;

    let mut terminal = ratatui::init();
    let result = Engine::new(game).run(&mut terminal, CrosstermInput).await;
    ratatui::restore();
    let game = result?;

    info!(status = ?game.state().status(), attempts = game.state().attempts(), "session ended");
    print_summary(&GameSummary::from_state(game.state()), config.summary)
}

/// Picks the secret and sets up the game.
pub fn new_game(dictionary: &Dictionary, config: &Config) -> Result<WordleGame> {
    let mut rng = config.rng();
    let secret = dictionary
        .choose(&mut rng)
        .ok_or_else(|| anyhow!("cannot start a game without words"))?;

    debug!(secret, "secret chosen");
    info!(words = dictionary.len(), pacing = ?config.pacing, "starting game");

    Ok(WordleGame::new(GameState::new(secret)?, config.pacing))
}

fn print_summary(summary: &GameSummary, format: SummaryFormat) -> Result<()> {
    match format {
        SummaryFormat::None => {}
        SummaryFormat::Share => summary.print(&mut TerminalContext::stdout())?,
        SummaryFormat::Json => println!("{}", summary.to_json()?),
    }
    Ok(())
}
