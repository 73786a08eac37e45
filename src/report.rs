//! Console text for every reportable value.
//!
//! Multi-line reports do not end with a newline; callers add their own.

use core::fmt;

use crate::card::Card;
use crate::options::GameMode;
use crate::result::{Draw, GameResult, MiniRound, Outcome, RoundResult, Step, SumDraw};

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol(), self.rank())
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BestOfThree => f.write_str("Game Mode 1: Best of 3 mini-rounds"),
            Self::SumOfCards => f.write_str("Game Mode 2: Sum of cards"),
        }
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "You drew: {}", self.player)?;
        write!(f, "Computer drew: {}", self.computer)
    }
}

impl fmt::Display for MiniRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.draw)?;
        match self.outcome {
            Outcome::Player => writeln!(f, "You win this mini-round!")?,
            Outcome::Computer => writeln!(f, "Computer wins this mini-round!")?,
            Outcome::Tie => writeln!(f, "Mini-round is a tie!")?,
        }
        write!(
            f,
            "Score - You: {} Computer: {}",
            self.tally.player, self.tally.computer
        )
    }
}

impl fmt::Display for SumDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.draw)?;
        write!(
            f,
            "Current sum - You: {} Computer: {}",
            self.player_sum, self.computer_sum
        )?;
        if let Some(round) = &self.round_result {
            write!(f, "\n{round}")?;
        }
        Ok(())
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let round = self.round;
        match self.outcome {
            Outcome::Player => writeln!(f, "You win round {round}!")?,
            Outcome::Computer => writeln!(f, "Computer wins round {round}!")?,
            Outcome::Tie => writeln!(f, "Round {round} is a tie!")?,
        }
        write!(
            f,
            "Rounds - You: {} Computer: {}",
            self.tally.player, self.tally.computer
        )
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MiniRound(mini) => fmt::Display::fmt(mini, f),
            Self::Sum(sum) => fmt::Display::fmt(sum, f),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Final Score - You: {} Computer: {}",
            self.tally.player, self.tally.computer
        )?;
        match self.outcome {
            Outcome::Player => f.write_str("You won the game!"),
            Outcome::Computer => f.write_str("Computer won the game!"),
            Outcome::Tie => f.write_str("The game is a tie!"),
        }
    }
}
