//! Round engine and session state.

use crate::deck::CardSource;
use crate::error::PlayError;
use crate::options::GameMode;
use crate::result::{Draw, GameResult, Step, Tally};

mod best_of_three;
pub mod state;
mod sum_of_cards;

pub use state::{GameState, Position, Sums};

/// Mini-rounds in a best-of-three game, and in each sum-of-cards round.
pub const MINI_ROUNDS: u8 = 3;

/// Rounds in a sum-of-cards game.
pub const ROUNDS: u8 = 3;

/// The state of one game from mode selection to the final result.
///
/// A session is a plain value: every round operation takes it by value and
/// hands back the updated session together with a report of what happened.
///
/// ```
/// use cardduel::{Deck, GameMode, Session};
///
/// let mut deck = Deck::new(7);
/// let mut session = Session::new(GameMode::BestOfThree);
/// while !session.is_finished() {
///     let (next, step) = session.step(&mut deck).unwrap();
///     println!("{step}");
///     session = next;
/// }
/// let result = session.result().unwrap();
/// assert_eq!(result.tally.played(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    mode: GameMode,
    state: GameState,
    position: Position,
    tally: Tally,
    sums: Sums,
}

impl Session {
    /// Starts a new game in the given mode.
    #[must_use]
    pub const fn new(mode: GameMode) -> Self {
        Self {
            mode,
            state: GameState::InProgress,
            position: Position::START,
            tally: Tally {
                player: 0,
                computer: 0,
                ties: 0,
            },
            sums: Sums {
                player: 0,
                computer: 0,
            },
        }
    }

    /// The mode being played.
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// The current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether every round has been played.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished)
    }

    /// Where the next draw falls.
    ///
    /// Once the game is finished this stays on the last position played.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Wins so far.
    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    /// Card sums of the current sum-of-cards round.
    #[must_use]
    pub const fn sums(&self) -> Sums {
        self.sums
    }

    /// Plays the next draw of whichever mode this session is in.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::GameOver`] if the game is already finished.
    pub fn step<S>(self, source: &mut S) -> Result<(Self, Step), PlayError>
    where
        S: CardSource + ?Sized,
    {
        match self.mode {
            GameMode::BestOfThree => self
                .play_mini_round(source)
                .map(|(session, mini)| (session, Step::MiniRound(mini))),
            GameMode::SumOfCards => self
                .play_sum_draw(source)
                .map(|(session, sum)| (session, Step::Sum(sum))),
        }
    }

    /// Plays every remaining draw, handing each step to `on_step`, and
    /// returns the final result.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::GameOver`] if the game is already finished.
    pub fn play_out<S, F>(self, source: &mut S, mut on_step: F) -> Result<GameResult, PlayError>
    where
        S: CardSource + ?Sized,
        F: FnMut(&Step),
    {
        if self.is_finished() {
            return Err(PlayError::GameOver);
        }

        let mut session = self;
        while !session.is_finished() {
            let (next, step) = session.step(source)?;
            on_step(&step);
            session = next;
        }
        session.result()
    }

    /// Returns the final tally and who won.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::NotFinished`] while rounds remain.
    pub fn result(&self) -> Result<GameResult, PlayError> {
        if !self.is_finished() {
            return Err(PlayError::NotFinished);
        }

        let outcome = self.tally.outcome();
        log::debug!(
            "game over: {:?} ({}-{}, {} tied)",
            outcome,
            self.tally.player,
            self.tally.computer,
            self.tally.ties
        );

        Ok(GameResult {
            mode: self.mode,
            tally: self.tally,
            outcome,
        })
    }

    /// Checks the session can take a draw in `mode`.
    fn ensure_playable(&self, mode: GameMode) -> Result<(), PlayError> {
        if self.mode != mode {
            return Err(PlayError::WrongMode);
        }
        if self.is_finished() {
            return Err(PlayError::GameOver);
        }
        Ok(())
    }
}

/// Draws the player's card, then the computer's.
fn draw_pair<S>(source: &mut S) -> Draw
where
    S: CardSource + ?Sized,
{
    let player = source.draw();
    let computer = source.draw();
    Draw { player, computer }
}
