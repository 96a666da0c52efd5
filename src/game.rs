//! Text-mode game session
//!
//! Drives a [`Board`] between human and AI seats over any line-based input
//! and text output. The binary wires it to stdin/stdout; tests feed it
//! scripted input.

use std::io::{BufRead, Write};

use log::{info, warn};

use crate::agent::Agent;
use crate::board::{Board, Outcome, Pos, Stone};
use crate::config::{GameConfig, GameMode};
use crate::error::GameError;

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// Someone completed five, or the board filled up
    Finished(Outcome),
    /// AI vs AI reached its move cap first
    MoveLimit,
    /// The human's input stream ended mid-game
    InputClosed,
}

/// Parse `"row col"` (space or comma separated) into a position.
///
/// Range is not checked here; the board rejects out-of-bounds moves.
pub fn parse_move(line: &str) -> Option<Pos> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Pos::new(row, col))
}

/// One game played over a text interface.
pub struct ConsoleGame<R, W> {
    config: GameConfig,
    board: Board,
    black: Option<Agent>,
    white: Option<Agent>,
    moves_played: usize,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    /// Validate `config` and set up the board and AI seats.
    pub fn new(config: GameConfig, input: R, output: W) -> Result<Self, GameError> {
        config.validate()?;
        let board = Board::new(config.board_size)?;
        let seat = |color: Stone| {
            if config.is_human(color) {
                Ok(None)
            } else {
                config.player(color).agent(color).map(Some)
            }
        };
        let black = seat(Stone::Black)?;
        let white = seat(Stone::White)?;

        Ok(Self {
            config,
            board,
            black,
            white,
            moves_played: 0,
            input,
            output,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Play until the game ends, the move cap is hit or input runs out.
    pub fn run(&mut self) -> Result<GameEnd, GameError> {
        let end = loop {
            if let Some(outcome) = self.board.winner() {
                break GameEnd::Finished(outcome);
            }
            if self.config.mode == GameMode::AiVsAi && self.moves_played >= self.config.max_moves {
                break GameEnd::MoveLimit;
            }

            writeln!(self.output, "{}", self.board)?;

            let color = self.board.current_player();
            let agent = match color {
                Stone::White => self.white.as_mut(),
                _ => self.black.as_mut(),
            };
            if let Some(agent) = agent {
                let result = agent.choose_move_with_stats(&self.board);
                self.board.make_move(result.best_move)?;
                writeln!(
                    self.output,
                    "{} ({}) plays {} [{} nodes, {}ms]",
                    color.name(),
                    result.algorithm,
                    result.best_move,
                    result.nodes,
                    result.time_ms
                )?;
            } else if !self.human_turn(color)? {
                break GameEnd::InputClosed;
            }
            self.moves_played += 1;
        };

        if end != GameEnd::InputClosed {
            writeln!(self.output, "{}", self.board)?;
        }
        let message = self.end_message(end);
        info!("{message} after {} moves", self.moves_played);
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(end)
    }

    /// Prompt until a legal move is entered. Returns `false` on end of input.
    fn human_turn(&mut self, color: Stone) -> Result<bool, GameError> {
        loop {
            write!(self.output, "{} to move, enter row and column: ", color.name())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(false);
            }

            let Some(pos) = parse_move(&line) else {
                warn!("unparsable move input {:?}", line.trim());
                writeln!(self.output, "Invalid input, expected two numbers like '7 7'")?;
                continue;
            };
            match self.board.make_move(pos) {
                Ok(()) => return Ok(true),
                Err(err) => {
                    warn!("rejected move {pos} for {}: {err}", color.name());
                    writeln!(self.output, "Invalid move: {err}")?;
                }
            }
        }
    }

    fn end_message(&self, end: GameEnd) -> String {
        match end {
            GameEnd::Finished(Outcome::Win(color)) => {
                if self.config.mode == GameMode::AiVsAi {
                    format!("{} ({}) wins!", color.name(), self.config.player(color).algorithm)
                } else if self.config.is_human(color) {
                    format!("{} wins! You beat the AI.", color.name())
                } else {
                    format!("{} wins! The AI beat you.", color.name())
                }
            }
            GameEnd::Finished(Outcome::Draw) => "Draw!".to_string(),
            GameEnd::MoveLimit => format!(
                "Move limit of {} reached without a winner.",
                self.config.max_moves
            ),
            GameEnd::InputClosed => "Input closed, game abandoned.".to_string(),
        }
    }
}
