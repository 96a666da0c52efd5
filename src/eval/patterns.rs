//! Pattern scores for Gomoku evaluation
//!
//! A pattern is a run of consecutive same-color stones along one axis,
//! classified by its length and how many of its two ends are still open.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    // Winning pattern
    /// Five or more in a row
    pub const FIVE: i32 = 10_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 5_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i32 = 500;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 200;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 50;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 10;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 5;

    /// Lone stone with at least one free neighbor on the axis
    pub const ONE: i32 = 1;
}

/// Score a run of `consecutive` stones with `open_ends` (0-2) free ends.
///
/// Fully blocked runs shorter than five are worth nothing.
#[must_use]
pub fn pattern_score(consecutive: usize, open_ends: u8) -> i32 {
    match (consecutive, open_ends) {
        (5.., _) => PatternScore::FIVE,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (1, 1..) => PatternScore::ONE,
        _ => 0,
    }
}
