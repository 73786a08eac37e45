use crate::deck::CardSource;
use crate::error::PlayError;
use crate::options::GameMode;
use crate::result::{Outcome, RoundResult, SumDraw};

use super::{GameState, MINI_ROUNDS, ROUNDS, Session, Sums, draw_pair};

impl Session {
    /// Plays one draw of a sum-of-cards round.
    ///
    /// Both ranks are added to the round's running sums. The third draw of a
    /// round closes it: the higher sum wins the round, equal sums tie, and
    /// the sums start again from zero for the next round.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::WrongMode`] for a best-of-three session and
    /// [`PlayError::GameOver`] once the last round has been played.
    pub fn play_sum_draw<S>(mut self, source: &mut S) -> Result<(Self, SumDraw), PlayError>
    where
        S: CardSource + ?Sized,
    {
        self.ensure_playable(GameMode::SumOfCards)?;

        let round = self.position.round;
        let mini_round = self.position.mini_round;
        let draw = draw_pair(source);

        self.sums.player += u16::from(draw.player.rank());
        self.sums.computer += u16::from(draw.computer.rank());
        let Sums {
            player: player_sum,
            computer: computer_sum,
        } = self.sums;

        let round_result = if mini_round >= MINI_ROUNDS {
            Some(self.close_round(round))
        } else {
            self.position.mini_round += 1;
            None
        };

        Ok((
            self,
            SumDraw {
                round,
                mini_round,
                draw,
                player_sum,
                computer_sum,
                round_result,
            },
        ))
    }

    /// Scores the finished round and moves on to the next one.
    fn close_round(&mut self, round: u8) -> RoundResult {
        let Sums { player, computer } = self.sums;
        let outcome = Outcome::decide(player, computer);
        self.tally.record(outcome);

        log::debug!("round {round}: {player} vs {computer} -> {outcome:?}");

        self.sums = Sums::default();
        if round >= ROUNDS {
            self.state = GameState::Finished;
        } else {
            self.position.round += 1;
            self.position.mini_round = 1;
        }

        RoundResult {
            round,
            player_sum: player,
            computer_sum: computer,
            outcome,
            tally: self.tally,
        }
    }
}
