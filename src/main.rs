//! Gomoku AI
//!
//! Play against a minimax or alpha-beta AI, or watch two AIs play each
//! other, in a window or on the terminal.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use gomoku::config::{DEFAULT_DEPTH, DEFAULT_MAX_MOVES};
use gomoku::ui::{GameState, GomokuApp};
use gomoku::{Algorithm, ConsoleGame, GameConfig, GameMode, PlayerConfig, Stone, DEFAULT_BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// One human against the AI
    Human,
    /// Two AIs against each other
    AiVsAi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Color {
    Black,
    White,
}

impl From<Color> for Stone {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Stone::Black,
            Color::White => Stone::White,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(version, about = "Gomoku with a minimax / alpha-beta AI", long_about = None)]
struct Cli {
    /// Lines per side of the board
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Who plays
    #[arg(long, value_enum, default_value_t = Mode::Human)]
    mode: Mode,

    /// Color the AI plays in human mode
    #[arg(long, value_enum, default_value_t = Color::White)]
    ai_color: Color,

    /// Search algorithm for every AI seat
    #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
    algorithm: Algorithm,

    /// Search depth in plies for every AI seat
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Override the algorithm for Black
    #[arg(long, value_enum)]
    black_algorithm: Option<Algorithm>,

    /// Override the depth for Black
    #[arg(long)]
    black_depth: Option<u8>,

    /// Override the algorithm for White
    #[arg(long, value_enum)]
    white_algorithm: Option<Algorithm>,

    /// Override the depth for White
    #[arg(long)]
    white_depth: Option<u8>,

    /// Move cap for AI vs AI games
    #[arg(long, default_value_t = DEFAULT_MAX_MOVES)]
    max_moves: usize,

    /// Play on the terminal instead of opening a window
    #[arg(long)]
    console: bool,
}

impl Cli {
    fn into_config(self) -> GameConfig {
        let mode = match self.mode {
            Mode::Human => GameMode::HumanVsAi {
                ai_color: self.ai_color.into(),
            },
            Mode::AiVsAi => GameMode::AiVsAi,
        };
        let seat = |algorithm: Option<Algorithm>, depth: Option<u8>| {
            PlayerConfig::new(
                algorithm.unwrap_or(self.algorithm),
                depth.unwrap_or(self.depth),
            )
        };

        GameConfig {
            board_size: self.size,
            mode,
            black: seat(self.black_algorithm, self.black_depth),
            white: seat(self.white_algorithm, self.white_depth),
            max_moves: self.max_moves,
            console: self.console,
        }
    }
}

fn run_console(config: GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut game = ConsoleGame::new(config, stdin.lock(), io::stdout())
        .context("failed to set up console game")?;
    let end = game.run().context("console game failed")?;
    info!("console game ended: {end:?}");
    Ok(())
}

fn run_gui(config: GameConfig) -> Result<()> {
    let state = GameState::new(config).context("failed to set up game")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("window closed with an error: {e}"))
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Cli::parse().into_config();
    config.validate().context("invalid command line")?;
    info!("starting {:?}", config);

    if config.console {
        run_console(config)
    } else {
        run_gui(config)
    }
}
