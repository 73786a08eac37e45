//! Card sources: the seeded deck and forced draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};

/// Something the round engine can draw cards from.
///
/// Implemented by [`Deck`] for real play and by any `FnMut() -> Card`
/// closure, which makes it easy to force specific draws:
///
/// ```
/// use cardduel::{Card, CardSource};
///
/// let mut ranks = [7, 3].into_iter();
/// let mut source = move || Card::new(ranks.next().unwrap_or(1)).unwrap();
/// assert_eq!(source.draw().rank(), 7);
/// assert_eq!(source.draw().rank(), 3);
/// ```
pub trait CardSource {
    /// Draws one card.
    fn draw(&mut self) -> Card;
}

impl<F> CardSource for F
where
    F: FnMut() -> Card,
{
    fn draw(&mut self) -> Card {
        self()
    }
}

/// A bottomless deck: every draw picks one of the 13 faces uniformly at
/// random, with replacement.
#[derive(Debug, Clone)]
pub struct Deck {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Deck {
    /// Creates a deck whose draws are fully determined by `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardduel::{CardSource, Deck};
    ///
    /// let mut a = Deck::new(42);
    /// let mut b = Deck::new(42);
    /// assert_eq!(a.draw(), b.draw());
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this deck was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl CardSource for Deck {
    fn draw(&mut self) -> Card {
        let card = Card::from_index(self.rng.random_range(0..DECK_SIZE));
        log::trace!("drew {} ({})", card.symbol(), card.rank());
        card
    }
}
