//! Game session configuration

use crate::agent::{Agent, Algorithm};
use crate::board::{Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

/// Default search depth for AI players
pub const DEFAULT_DEPTH: u8 = 2;
/// Default cap on total moves in an AI vs AI game
pub const DEFAULT_MAX_MOVES: usize = 100;

/// Who plays whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// One human seat, one AI seat
    HumanVsAi {
        /// Color the AI plays
        ai_color: Stone,
    },
    /// Both seats are AI; the game stops after `max_moves` moves
    AiVsAi,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsAi {
            ai_color: Stone::White,
        }
    }
}

/// Search settings for one AI seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerConfig {
    pub algorithm: Algorithm,
    pub depth: u8,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl PlayerConfig {
    #[must_use]
    pub const fn new(algorithm: Algorithm, depth: u8) -> Self {
        Self { algorithm, depth }
    }

    /// Build an agent for `color` from these settings
    pub fn agent(&self, color: Stone) -> Result<Agent, ConfigError> {
        Agent::new(color, self.algorithm, self.depth)
    }
}

/// Everything needed to start a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub mode: GameMode,
    /// AI settings for Black (used when Black is an AI seat)
    pub black: PlayerConfig,
    /// AI settings for White (used when White is an AI seat)
    pub white: PlayerConfig,
    /// Move cap for AI vs AI
    pub max_moves: usize,
    /// Text interface instead of the window
    pub console: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            mode: GameMode::default(),
            black: PlayerConfig::default(),
            white: PlayerConfig::default(),
            max_moves: DEFAULT_MAX_MOVES,
            console: false,
        }
    }
}

impl GameConfig {
    /// Check every field. Called before a session starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::InvalidBoardSize {
                size: self.board_size,
            });
        }
        if let GameMode::HumanVsAi { ai_color } = self.mode {
            if ai_color == Stone::Empty {
                return Err(ConfigError::InvalidPlayer);
            }
        }
        for color in self.ai_colors() {
            if self.player(color).depth == 0 {
                return Err(ConfigError::InvalidDepth);
            }
        }
        if self.mode == GameMode::AiVsAi && self.max_moves == 0 {
            return Err(ConfigError::InvalidMoveLimit);
        }
        Ok(())
    }

    /// AI settings for a color
    #[must_use]
    pub fn player(&self, color: Stone) -> &PlayerConfig {
        match color {
            Stone::White => &self.white,
            _ => &self.black,
        }
    }

    /// Colors played by the AI in this mode
    #[must_use]
    pub fn ai_colors(&self) -> Vec<Stone> {
        match self.mode {
            GameMode::HumanVsAi { ai_color } => vec![ai_color],
            GameMode::AiVsAi => vec![Stone::Black, Stone::White],
        }
    }

    /// Whether `color` is played by a human in this mode
    #[must_use]
    pub fn is_human(&self, color: Stone) -> bool {
        matches!(self.mode, GameMode::HumanVsAi { ai_color } if ai_color != color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.max_moves, 100);
        assert_eq!(config.black.algorithm, Algorithm::AlphaBeta);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_board_size_bounds() {
        let mut config = GameConfig::default();
        config.board_size = 4;
        assert_eq!(config.validate(), Err(ConfigError::InvalidBoardSize { size: 4 }));
        config.board_size = 27;
        assert!(config.validate().is_err());
        config.board_size = 5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_depth_checked_only_for_ai_seats() {
        let mut config = GameConfig::default();
        // Human plays Black, so Black's depth is unused
        config.black.depth = 0;
        assert!(config.validate().is_ok());

        config.mode = GameMode::AiVsAi;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDepth));
    }

    #[test]
    fn test_move_limit() {
        let config = GameConfig {
            mode: GameMode::AiVsAi,
            max_moves: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidMoveLimit));
    }

    #[test]
    fn test_seats() {
        let config = GameConfig {
            mode: GameMode::HumanVsAi {
                ai_color: Stone::Black,
            },
            ..GameConfig::default()
        };
        assert!(config.is_human(Stone::White));
        assert!(!config.is_human(Stone::Black));
        assert_eq!(config.ai_colors(), vec![Stone::Black]);

        let config = GameConfig {
            mode: GameMode::AiVsAi,
            ..GameConfig::default()
        };
        assert!(!config.is_human(Stone::Black));
        assert_eq!(config.ai_colors().len(), 2);
    }

    #[test]
    fn test_player_config_builds_agent() {
        let agent = PlayerConfig::new(Algorithm::Minimax, 3).agent(Stone::Black).unwrap();
        assert_eq!(agent.depth(), 3);
        assert_eq!(agent.algorithm(), Algorithm::Minimax);
        assert!(PlayerConfig::new(Algorithm::Minimax, 0).agent(Stone::Black).is_err());
    }
}
