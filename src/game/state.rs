//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Draws remain to be played.
    InProgress,
    /// Every round has been played and the result can be read.
    Finished,
}

/// Where the next draw falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Round number, starting at 1. Always 1 in best-of-three games.
    pub round: u8,
    /// Mini-round number within the round, starting at 1.
    pub mini_round: u8,
}

impl Position {
    pub(crate) const START: Self = Self {
        round: 1,
        mini_round: 1,
    };
}

/// Running card sums of the current sum-of-cards round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sums {
    /// The player's sum.
    pub player: u16,
    /// The computer's sum.
    pub computer: u16,
}
