//! Card faces and the fixed rank table.

/// Number of distinct card faces.
pub const DECK_SIZE: usize = 13;

/// Card faces ordered by rank: Ace through King of Spades.
///
/// The Unicode block also holds a Knight (U+1F0AC) between Jack and Queen;
/// it is not part of the deck.
pub const DECK: [&str; DECK_SIZE] = [
    "\u{1F0A1}",
    "\u{1F0A2}",
    "\u{1F0A3}",
    "\u{1F0A4}",
    "\u{1F0A5}",
    "\u{1F0A6}",
    "\u{1F0A7}",
    "\u{1F0A8}",
    "\u{1F0A9}",
    "\u{1F0AA}",
    "\u{1F0AB}",
    "\u{1F0AD}",
    "\u{1F0AE}",
];

/// A drawn card.
///
/// The rank is always within `1..=DECK_SIZE`; a card can only be built
/// through [`Card::new`] or by drawing from a [`Deck`](crate::Deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: u8,
}

impl Card {
    /// Creates a card of the given rank (1 = Ace, 13 = King).
    ///
    /// Returns `None` for ranks outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardduel::{Card, DECK};
    ///
    /// let seven = Card::new(7).unwrap();
    /// assert_eq!(seven.symbol(), DECK[6]);
    /// assert!(Card::new(0).is_none());
    /// assert!(Card::new(14).is_none());
    /// ```
    #[must_use]
    pub const fn new(rank: u8) -> Option<Self> {
        if rank >= 1 && rank as usize <= DECK_SIZE {
            Some(Self { rank })
        } else {
            None
        }
    }

    /// Maps a deck index (`0..DECK_SIZE`) to its card.
    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < DECK_SIZE);
        Self {
            rank: index as u8 + 1,
        }
    }

    /// The rank of the card, from 1 to 13.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// The display glyph for this rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        DECK[self.rank as usize - 1]
    }
}
