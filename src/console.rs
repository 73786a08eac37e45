//! Terminal front end: prompts, pauses and the game loop.

use core::fmt::Display;
use std::io::{BufRead, Write};

use crate::deck::CardSource;
use crate::error::{ChoiceError, ConsoleError};
use crate::game::Session;
use crate::input::{LineSource, parse_bounded, resolve};
use crate::options::{GameMode, GameOptions};
use crate::result::{GameResult, Step};

/// Banner printed when the game starts.
pub const WELCOME: &str = "Welcome to the Simplified Card Game!";
/// Mode selection prompt.
pub const MODE_PROMPT: &str = "Choose game mode (1: best-of-3, 2: sum of cards): ";
/// Pause before every draw.
pub const DRAW_PROMPT: &str = "Press ENTER to draw cards.";
/// Pause between sum-of-cards rounds.
pub const NEXT_ROUND_PROMPT: &str = "Press ENTER to continue to the next round.";

/// Line-oriented console over any reader and writer.
///
/// The binary wraps stdin and stdout; tests feed a `Cursor` and collect the
/// output in a `Vec<u8>`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a console reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Splits the console back into its reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prints one line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn say(&mut self, message: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Prints `message` and waits for a line, which is thrown away.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input.
    pub fn pause(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.read_line(message)?.map(drop).ok_or(ConsoleError::Closed)
    }

    /// Asks until the player types an integer within `min..=max`.
    ///
    /// Every rejected line is answered with an error line and the prompt is
    /// shown again. There is no retry limit.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] if input ends before a valid line.
    pub fn prompt_bounded_int(
        &mut self,
        message: &str,
        min: i64,
        max: i64,
    ) -> Result<i64, ConsoleError> {
        self.prompt_with(message, |line| parse_bounded(line, min, max))
    }

    /// Asks which mode to play.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] if input ends before a valid choice.
    pub fn choose_mode(&mut self) -> Result<GameMode, ConsoleError> {
        self.prompt_with(MODE_PROMPT, str::parse::<GameMode>)
    }

    fn prompt_with<T, F>(&mut self, message: &str, parse: F) -> Result<T, ConsoleError>
    where
        F: Fn(&str) -> Result<T, ChoiceError>,
    {
        let mut prompt = Prompt {
            console: self,
            message,
        };
        resolve(&mut prompt, parse)?
            .map(|resolved| resolved.value)
            .ok_or(ConsoleError::Closed)
    }

    /// Prints `message` and reads one line, `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read,
    /// so a garbled line is rejected like any other bad choice.
    fn read_line(&mut self, message: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

/// The console asking one question over and over.
struct Prompt<'a, R, W> {
    console: &'a mut Console<R, W>,
    message: &'a str,
}

impl<R, W> LineSource for Prompt<'_, R, W>
where
    R: BufRead,
    W: Write,
{
    type Line = String;
    type Error = ConsoleError;

    fn next_line(&mut self) -> Result<Option<String>, ConsoleError> {
        self.console.read_line(self.message)
    }

    fn rejected(&mut self, err: ChoiceError) -> Result<(), ConsoleError> {
        self.console.say(err)
    }
}

/// Plays one full game on the console and returns its result.
///
/// The mode comes from `options` when set, otherwise the player is asked.
///
/// # Errors
///
/// Returns [`ConsoleError::Closed`] if input ends mid-game, or an I/O error
/// from the underlying streams.
pub fn run<R, W, S>(
    console: &mut Console<R, W>,
    options: &GameOptions,
    source: &mut S,
) -> Result<GameResult, ConsoleError>
where
    R: BufRead,
    W: Write,
    S: CardSource + ?Sized,
{
    console.say(WELCOME)?;

    let mode = match options.mode {
        Some(mode) => mode,
        None => console.choose_mode()?,
    };
    log::info!("starting {mode:?}");
    console.say(format_args!("\n{mode}"))?;

    let mut session = Session::new(mode);
    while !session.is_finished() {
        let position = session.position();
        match mode {
            GameMode::BestOfThree => {
                console.say(format_args!("\nMini-round {}", position.mini_round))?;
            }
            GameMode::SumOfCards if position.mini_round == 1 => {
                console.say(format_args!("\nRound {}", position.round))?;
            }
            GameMode::SumOfCards => {}
        }

        if options.pause {
            console.pause(DRAW_PROMPT)?;
        }

        let (next, step) = session.step(source)?;
        console.say(step)?;
        session = next;

        let round_closed = matches!(step, Step::Sum(sum) if sum.round_result.is_some());
        if options.pause && round_closed && !session.is_finished() {
            console.pause(NEXT_ROUND_PROMPT)?;
        }
    }

    let result = session.result()?;
    console.say(format_args!("\n{result}"))?;
    console.say("\nThank you for playing!")?;
    console.say("Done.")?;

    Ok(result)
}
