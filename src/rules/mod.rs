//! Game rules for freestyle Gomoku
//!
//! Five or more stones in an unbroken line wins; a full board with no five
//! is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, has_five, is_full, is_terminal, winning_line, WIN_LENGTH};
