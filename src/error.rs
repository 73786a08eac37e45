//! Error types for game operations.

use thiserror::Error;

/// Errors produced when a line of input is not an acceptable choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChoiceError {
    /// The line is not an integer.
    #[error("Invalid input. Enter a number between {min} and {max}.")]
    NotANumber {
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// The integer is outside the accepted range.
    #[error("Invalid input. Enter a number between {min} and {max}.")]
    OutOfRange {
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
}

/// Errors that can occur while driving a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Every round has already been played.
    #[error("the game is already over")]
    GameOver,
    /// The operation belongs to the other game mode.
    #[error("operation not available in this game mode")]
    WrongMode,
    /// The final result was requested before the last round.
    #[error("the game is not finished yet")]
    NotFinished,
}

/// Errors that end a console session.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The input stream reached its end.
    #[error("input closed")]
    Closed,
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The session was driven out of order.
    #[error(transparent)]
    Play(#[from] PlayError),
}
