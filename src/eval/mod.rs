//! Evaluation module for Gomoku positions
//!
//! This module provides pattern recognition and scoring for board positions.
//! Runs of stones are scored by length and by how many ends are open.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_stones, line_score};
pub use patterns::{pattern_score, PatternScore};
