//! Play a card duel against the computer on the terminal.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use cardduel::console::{self, Console};
use cardduel::{ConsoleError, Deck, GameMode, GameOptions};
use clap::Parser;

/// Draw cards against the computer, best of three or highest sums.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Game mode (1: best-of-3, 2: sum of cards). Asked for when omitted.
    #[arg(long)]
    mode: Option<GameMode>,
    /// Seed for the card draws. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Draw without waiting for ENTER.
    #[arg(long)]
    no_pause: bool,
}

impl Args {
    fn options(&self) -> GameOptions {
        let options = GameOptions::default().with_pause(!self.no_pause);
        match self.mode {
            Some(mode) => options.with_mode(mode),
            None => options,
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

fn main() {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(time_seed);
    log::debug!("deck seed {seed}");

    let mut deck = Deck::new(seed);
    let mut terminal = Console::new(io::stdin().lock(), io::stdout().lock());

    match console::run(&mut terminal, &args.options(), &mut deck) {
        Ok(result) => log::info!("game finished: {:?}", result.outcome),
        Err(ConsoleError::Closed) => {
            if let Err(err) = terminal.say("\nInput closed. Exiting game.") {
                log::error!("{err}");
            }
        }
        Err(err) => log::error!("{err}"),
    }
}
