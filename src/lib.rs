//! A console card duel against the computer, with a `no_std` engine.
//!
//! Each side draws from a fixed 13-card deck (Ace to King of Spades, drawn
//! with replacement). A [`Session`] plays either of two modes:
//!
//! - [`GameMode::BestOfThree`]: three mini-rounds, the higher card wins each.
//! - [`GameMode::SumOfCards`]: three rounds of three draws, the higher sum
//!   wins each round.
//!
//! # Example
//!
//! ```
//! use cardduel::{Deck, GameMode, Outcome, Session};
//!
//! let mut deck = Deck::new(42);
//! let result = Session::new(GameMode::SumOfCards)
//!     .play_out(&mut deck, |step| println!("{step}"))
//!     .unwrap();
//! assert_eq!(result.outcome, result.tally.outcome());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod input;
pub mod options;
mod report;
pub mod result;

// Re-export main types
pub use card::{Card, DECK, DECK_SIZE};
#[cfg(feature = "std")]
pub use console::Console;
#[cfg(feature = "std")]
pub use error::ConsoleError;
pub use deck::{CardSource, Deck};
pub use error::{ChoiceError, PlayError};
pub use game::{GameState, MINI_ROUNDS, Position, ROUNDS, Session, Sums};
pub use options::{GameMode, GameOptions};
pub use result::{Draw, GameResult, MiniRound, Outcome, RoundResult, Step, SumDraw, Tally};
