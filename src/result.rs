//! Comparison outcomes and the values reported after each step.

use crate::card::Card;
use crate::options::GameMode;

/// Result of one comparison: a mini-round, a round or the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player's value is strictly higher.
    Player,
    /// The computer's value is strictly higher.
    Computer,
    /// Both values are equal.
    Tie,
}

impl Outcome {
    /// Compares the player's value against the computer's.
    ///
    /// ```
    /// use cardduel::Outcome;
    ///
    /// assert_eq!(Outcome::decide(7, 3), Outcome::Player);
    /// assert_eq!(Outcome::decide(3, 7), Outcome::Computer);
    /// assert_eq!(Outcome::decide(5, 5), Outcome::Tie);
    /// ```
    #[must_use]
    pub fn decide<T: Ord>(player: T, computer: T) -> Self {
        match player.cmp(&computer) {
            core::cmp::Ordering::Greater => Self::Player,
            core::cmp::Ordering::Less => Self::Computer,
            core::cmp::Ordering::Equal => Self::Tie,
        }
    }
}

/// Running win counters for both sides.
///
/// Counts mini-round wins in best-of-three games and round wins in
/// sum-of-cards games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Comparisons won by the player.
    pub player: u8,
    /// Comparisons won by the computer.
    pub computer: u8,
    /// Comparisons that ended level.
    pub ties: u8,
}

impl Tally {
    /// Counts one more outcome.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Player => self.player += 1,
            Outcome::Computer => self.computer += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Number of outcomes recorded so far.
    #[must_use]
    pub const fn played(&self) -> u8 {
        self.player + self.computer + self.ties
    }

    /// Who leads on wins; ties do not count for either side.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::decide(self.player, self.computer)
    }
}

/// One card for each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// The player's card.
    pub player: Card,
    /// The computer's card.
    pub computer: Card,
}

/// Report of a best-of-three mini-round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniRound {
    /// Mini-round number, starting at 1.
    pub number: u8,
    /// Cards drawn.
    pub draw: Draw,
    /// Who won the mini-round.
    pub outcome: Outcome,
    /// Mini-round wins after this one.
    pub tally: Tally,
}

/// Report of one draw in a sum-of-cards round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumDraw {
    /// Round number, starting at 1.
    pub round: u8,
    /// Mini-round number within the round, starting at 1.
    pub mini_round: u8,
    /// Cards drawn.
    pub draw: Draw,
    /// The player's sum for the round so far.
    pub player_sum: u16,
    /// The computer's sum for the round so far.
    pub computer_sum: u16,
    /// Set on the last draw of a round.
    pub round_result: Option<RoundResult>,
}

/// Result of a completed sum-of-cards round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u8,
    /// The player's final sum for the round.
    pub player_sum: u16,
    /// The computer's final sum for the round.
    pub computer_sum: u16,
    /// Who won the round.
    pub outcome: Outcome,
    /// Round wins after this round.
    pub tally: Tally,
}

/// One step of play, whatever the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A best-of-three mini-round.
    MiniRound(MiniRound),
    /// A sum-of-cards draw.
    Sum(SumDraw),
}

impl Step {
    /// Cards drawn in this step.
    #[must_use]
    pub const fn draw(&self) -> Draw {
        match self {
            Self::MiniRound(mini) => mini.draw,
            Self::Sum(sum) => sum.draw,
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// The mode that was played.
    pub mode: GameMode,
    /// Final win counters.
    pub tally: Tally,
    /// Who won the game.
    pub outcome: Outcome,
}
