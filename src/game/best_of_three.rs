use crate::deck::CardSource;
use crate::error::PlayError;
use crate::options::GameMode;
use crate::result::{MiniRound, Outcome};

use super::{GameState, MINI_ROUNDS, Session, draw_pair};

impl Session {
    /// Plays one best-of-three mini-round.
    ///
    /// Both sides draw a card and the higher rank wins; equal ranks tie and
    /// nobody scores. All three mini-rounds are always played, even when one
    /// side can no longer be caught.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::WrongMode`] for a sum-of-cards session and
    /// [`PlayError::GameOver`] once the third mini-round has been played.
    pub fn play_mini_round<S>(mut self, source: &mut S) -> Result<(Self, MiniRound), PlayError>
    where
        S: CardSource + ?Sized,
    {
        self.ensure_playable(GameMode::BestOfThree)?;

        let number = self.position.mini_round;
        let draw = draw_pair(source);
        let outcome = Outcome::decide(draw.player.rank(), draw.computer.rank());
        self.tally.record(outcome);

        log::debug!(
            "mini-round {number}: {} vs {} -> {outcome:?}",
            draw.player.rank(),
            draw.computer.rank()
        );

        if number >= MINI_ROUNDS {
            self.state = GameState::Finished;
        } else {
            self.position.mini_round += 1;
        }

        Ok((
            self,
            MiniRound {
                number,
                draw,
                outcome,
                tally: self.tally,
            },
        ))
    }
}
