use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use minigames_core::snake::SnakeConfig;
use minigames_core::wordle::{Statistics, WordList};
use minigames_core::{
    HIGH_SCORE_KEY, MemoryStorage, SnakeSession, Storage, WORDLE_STATS_KEY, WordleSession, load,
};

use crate::config::Settings;
use crate::present::{Presenter, Records};
use crate::store::FileStorage;

mod config;
mod host;
mod present;
mod store;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Emit one JSON frame per update instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Read settings from this TOML file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Force a seed instead of random
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Two players take turns on one board
    ConnectFour,
    /// Eat, grow and avoid the walls
    Snake,
    /// Guess the word of the day
    Wordle {
        /// Play the puzzle of another day, YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the Snake high score and Wordle statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let settings = Settings::load(cli.config.as_deref())?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut presenter = Presenter::new(io::stdout().lock(), cli.json);
    let storage = FileStorage::open(settings.storage.dir.as_deref());
    if storage.is_none() {
        log::warn!("No data directory available, progress will not be saved");
    }

    match cli.command {
        Command::ConnectFour => host::connect_four::run(io::stdin().lock(), &mut presenter),
        Command::Snake => match storage {
            Some(storage) => play_snake(settings.snake, storage, seed, &mut presenter),
            None => play_snake(settings.snake, MemoryStorage::new(), seed, &mut presenter),
        },
        Command::Wordle { date } => {
            let today = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            match storage {
                Some(storage) => play_wordle(storage, today, &mut presenter),
                None => play_wordle(MemoryStorage::new(), today, &mut presenter),
            }
        }
        Command::Stats => {
            let storage = storage.context("No data directory available")?;
            let records = Records {
                snake_high_score: load(&storage, HIGH_SCORE_KEY).unwrap_or(0),
                wordle: load::<Statistics>(&storage, WORDLE_STATS_KEY).unwrap_or_default(),
            };
            presenter.summary(&records)
        }
    }
}

fn play_snake(
    config: SnakeConfig,
    storage: impl Storage,
    seed: u64,
    presenter: &mut Presenter<impl io::Write>,
) -> anyhow::Result<()> {
    let mut session = SnakeSession::new(config, storage, seed);
    presenter.set_clear_screen(true);
    host::snake::run(&mut session, host::snake::spawn_stdin_reader(), presenter)
}

fn play_wordle(
    storage: impl Storage,
    today: NaiveDate,
    presenter: &mut Presenter<impl io::Write>,
) -> anyhow::Result<()> {
    let mut session = WordleSession::new(WordList::builtin(), storage, today);
    host::wordle::run(&mut session, io::stdin().lock(), presenter)
}
