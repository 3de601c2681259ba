use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use neon_snake::app::{App, AppControl};
use neon_snake::config::{Difficulty, FRAME_INTERVAL_MS, GameConfig};
use neon_snake::error::AppError;
use neon_snake::game::Simulation;
use neon_snake::input::InputHandler;
use neon_snake::logger;
use neon_snake::renderer;
use neon_snake::score::{FileScoreStore, ScoreStore, scores_path};
use neon_snake::terminal_runtime::{FrameClock, TerminalSession, install_panic_hook};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Skip the menus and start at this difficulty.
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Seed for food placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// High-score file location.
    #[arg(long)]
    scores: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Log file location.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logger::default_log_path);
    logger::init(&log_path, cli.log_level)?;
    log::info!("neon-snake {} starting", env!("CARGO_PKG_VERSION"));

    let store = open_store(cli.scores.clone().unwrap_or_else(scores_path));
    let simulation = match cli.seed {
        Some(seed) => Simulation::new_with_seed(GameConfig::default(), seed),
        None => Simulation::new(GameConfig::default()),
    };

    let mut app = App::new(simulation, store);
    if let Some(difficulty) = cli.difficulty {
        app.start(difficulty);
    }

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    let result = run(&mut session, &mut app);
    drop(session);

    log::info!("exiting, high scores: {:?}", app.high_scores());
    result
}

fn run<S: ScoreStore>(session: &mut TerminalSession, app: &mut App<S>) -> Result<(), AppError> {
    let clock = FrameClock::start();
    let mut input = InputHandler::new();
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, app))?;

        if let Some(game_input) = input.poll_input(frame_interval)? {
            if app.handle_input(game_input) == AppControl::Quit {
                return Ok(());
            }
        }

        if let Some(event) = app.on_frame(clock.now()) {
            log::trace!("frame event: {event:?}");
        }
    }
}

/// Opens the score file, warning on stderr (before raw mode) if it is unusable.
fn open_store(path: PathBuf) -> FileScoreStore {
    match FileScoreStore::open(&path) {
        Ok(store) => store,
        Err(error) => {
            eprintln!("Warning: {error}; starting with empty high scores");
            FileScoreStore::open_or_default(path)
        }
    }
}
