//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::agent::MoveResult;
use crate::board::{Board, Outcome, Pos, Stone};
use crate::config::{GameConfig, GameMode};
use crate::error::{ConfigError, MoveError};
use crate::rules::winning_line;

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Wall clock for the side to move, plus the last AI search time
pub struct TurnClock {
    turn_started: Option<Instant>,
    pub last_ai_time: Option<Duration>,
}

impl Default for TurnClock {
    fn default() -> Self {
        Self {
            turn_started: Some(Instant::now()),
            last_ai_time: None,
        }
    }
}

impl TurnClock {
    pub fn restart(&mut self) {
        self.turn_started = Some(Instant::now());
    }

    /// Freeze at zero until the next `restart`
    pub fn halt(&mut self) {
        self.turn_started = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.turn_started.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub config: GameConfig,
    pub move_history: Vec<Pos>,
    pub winning_line: Option<Vec<Pos>>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub clock: TurnClock,
    pub message: Option<String>,
}

impl GameState {
    /// Validate `config` and start a fresh game with it
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.board_size)?,
            config,
            move_history: Vec::new(),
            winning_line: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            clock: TurnClock::default(),
            message: None,
        })
    }

    /// Start over with the same configuration. A search in flight is abandoned.
    pub fn reset(&mut self) {
        self.board.reset();
        self.move_history.clear();
        self.winning_line = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.clock = TurnClock::default();
        self.message = None;
    }

    /// Start over in a different mode
    pub fn set_mode(&mut self, mode: GameMode) {
        self.config.mode = mode;
        self.reset();
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.board.current_player()
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.winner()
    }

    /// AI vs AI ran out of moves before anyone won
    pub fn move_limit_reached(&self) -> bool {
        self.config.mode == GameMode::AiVsAi
            && self.outcome().is_none()
            && self.move_history.len() >= self.config.max_moves
    }

    /// No more moves will be made in this game
    pub fn is_finished(&self) -> bool {
        self.outcome().is_some() || self.move_limit_reached()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.config.is_human(self.current_turn())
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn() && !self.is_finished()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone for the human at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_finished() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|err| {
            warn!("rejected move {pos}: {err}");
            format!("Invalid move: {err}")
        })
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), MoveError> {
        self.board.make_move(pos)?;

        self.move_history.push(pos);
        self.clock.halt();
        self.message = None;

        match self.outcome() {
            Some(Outcome::Win(winner)) => {
                self.winning_line = winning_line(&self.board, pos);
                info!("{} wins after {} moves", winner.name(), self.move_history.len());
            }
            Some(Outcome::Draw) => info!("draw after {} moves", self.move_history.len()),
            None => {
                if self.move_limit_reached() {
                    info!("move limit of {} reached", self.config.max_moves);
                }
                self.clock.restart();
            }
        }
        Ok(())
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let color = self.current_turn();
        let mut agent = match self.config.player(color).agent(color) {
            Ok(agent) => agent,
            Err(err) => {
                self.message = Some(format!("AI error: {err}"));
                return;
            }
        };
        let board = self.board.clone();

        let (tx, rx) = channel();
        thread::spawn(move || {
            let result = agent.choose_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.clock.last_ai_time = Some(elapsed);
            let pos = move_result.best_move;
            self.last_ai_result = Some(move_result);

            if let Err(err) = self.execute_move(pos) {
                warn!("AI move {pos} rejected: {err}");
                self.message = Some(format!("AI played an invalid move: {err}"));
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo the last human move together with the AI reply that followed it
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.config.mode {
            GameMode::HumanVsAi { ai_color } => {
                // Back to a position where the human is on move
                let last_mover = if self.move_history.len() % 2 == 1 {
                    Stone::Black
                } else {
                    Stone::White
                };
                if last_mover == ai_color && self.move_history.len() >= 2 {
                    2
                } else {
                    1
                }
            }
            GameMode::AiVsAi => 1,
        };

        // Simple undo: reset and replay
        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();

        self.board.reset();
        self.move_history.clear();
        self.winning_line = None;
        self.message = None;

        for pos in moves {
            if self.board.make_move(pos).is_ok() {
                self.move_history.push(pos);
            }
        }

        self.clock.restart();
    }
}
