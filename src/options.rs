//! Game configuration options.

use core::str::FromStr;

use crate::error::ChoiceError;
use crate::input::parse_bounded;

/// The two ways a game can be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Three mini-rounds, the higher card wins each one.
    BestOfThree,
    /// Three rounds of three draws each, the higher sum wins each round.
    SumOfCards,
}

impl GameMode {
    /// The number the player types to pick this mode.
    #[must_use]
    pub const fn choice(self) -> i64 {
        match self {
            Self::BestOfThree => 1,
            Self::SumOfCards => 2,
        }
    }
}

impl TryFrom<i64> for GameMode {
    type Error = ChoiceError;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(Self::BestOfThree),
            2 => Ok(Self::SumOfCards),
            value => Err(ChoiceError::OutOfRange {
                value,
                min: 1,
                max: 2,
            }),
        }
    }
}

impl FromStr for GameMode {
    type Err = ChoiceError;

    /// Parses a typed mode choice, `1` or `2`, ignoring surrounding whitespace.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_bounded(line, Self::BestOfThree.choice(), Self::SumOfCards.choice())
            .and_then(Self::try_from)
    }
}

/// Configuration options for a game.
///
/// ```
/// use cardduel::{GameMode, GameOptions};
///
/// let options = GameOptions::default()
///     .with_mode(GameMode::SumOfCards)
///     .with_pause(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Mode to play. `None` asks the player.
    pub mode: Option<GameMode>,
    /// Whether to wait for ENTER before each draw.
    pub pause: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            mode: None,
            pause: true,
        }
    }
}

impl GameOptions {
    /// Fixes the game mode so the player is not asked for it.
    ///
    /// # Example
    ///
    /// ```
    /// use cardduel::{GameMode, GameOptions};
    ///
    /// let options = GameOptions::default().with_mode(GameMode::BestOfThree);
    /// assert_eq!(options.mode, Some(GameMode::BestOfThree));
    /// ```
    #[must_use]
    pub const fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets whether the game waits for ENTER before each draw.
    ///
    /// # Example
    ///
    /// ```
    /// use cardduel::GameOptions;
    ///
    /// let options = GameOptions::default().with_pause(false);
    /// assert!(!options.pause);
    /// ```
    #[must_use]
    pub const fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }
}
