//! Console driver tests fed through in-memory streams.

use std::io::Cursor;

use cardduel::console::{self, DRAW_PROMPT, MODE_PROMPT, NEXT_ROUND_PROMPT, WELCOME};
use cardduel::{Card, Console, ConsoleError, GameMode, GameOptions, Outcome};

type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

const INVALID: &str = "Invalid input. Enter a number between 1 and 2.";

fn scripted(input: &str) -> TestConsole {
    raw(input.as_bytes())
}

fn raw(input: &[u8]) -> TestConsole {
    Console::new(Cursor::new(input.to_vec()), Vec::new())
}

fn output(term: TestConsole) -> String {
    let (_, written) = term.into_parts();
    String::from_utf8(written).unwrap()
}

fn constant(rank: u8) -> impl FnMut() -> Card {
    let card = Card::new(rank).unwrap();
    move || card
}

/// Alternates player and computer ranks.
fn alternating(player: u8, computer: u8) -> impl FnMut() -> Card {
    let mut player_turn = false;
    move || {
        player_turn = !player_turn;
        Card::new(if player_turn { player } else { computer }).unwrap()
    }
}

#[test]
fn mode_prompt_rejects_until_valid() {
    let mut term = scripted("abc\n0\n3\n-1\n\n 2 \n");
    assert_eq!(term.choose_mode().unwrap(), GameMode::SumOfCards);

    let text = output(term);
    assert_eq!(text.matches(MODE_PROMPT).count(), 6);
    assert_eq!(text.matches(INVALID).count(), 5);
}

#[test]
fn mode_prompt_rejects_bytes_that_are_not_utf8() {
    let mut term = raw(&[0xFF, 0xFE, b'\n', b'1', b'\n']);
    assert_eq!(term.choose_mode().unwrap(), GameMode::BestOfThree);

    let text = output(term);
    assert_eq!(text.matches(MODE_PROMPT).count(), 2);
    assert_eq!(text.matches(INVALID).count(), 1);
}

#[test]
fn last_line_without_newline_is_accepted() {
    let mut term = scripted("x\n2");
    assert_eq!(term.choose_mode().unwrap(), GameMode::SumOfCards);

    let mut term = scripted("7");
    assert_eq!(term.prompt_bounded_int("> ", 0, 9).unwrap(), 7);

    let mut term = scripted("\n\n");
    term.pause(DRAW_PROMPT).unwrap();
    term.pause(DRAW_PROMPT).unwrap();
    assert!(matches!(
        term.pause(DRAW_PROMPT).unwrap_err(),
        ConsoleError::Closed
    ));
}

#[test]
fn bounded_prompt_accepts_edges() {
    let mut term = scripted("1\n");
    assert_eq!(term.prompt_bounded_int("> ", 1, 2).unwrap(), 1);

    let mut term = scripted("10\n9\n");
    assert_eq!(term.prompt_bounded_int("> ", 0, 9).unwrap(), 9);
}

#[test]
fn end_of_input_closes_the_session() {
    let mut term = scripted("nope\n");
    assert!(matches!(
        term.choose_mode().unwrap_err(),
        ConsoleError::Closed
    ));

    let mut term = scripted("");
    assert!(matches!(
        term.pause(DRAW_PROMPT).unwrap_err(),
        ConsoleError::Closed
    ));
}

#[test]
fn best_of_three_game_on_the_console() {
    // Mode choice, then one ENTER per draw.
    let mut term = scripted("1\n\n\n\n");
    let result =
        console::run(&mut term, &GameOptions::default(), &mut alternating(7, 3)).unwrap();

    assert_eq!(result.outcome, Outcome::Player);
    assert_eq!((result.tally.player, result.tally.computer), (3, 0));

    let text = output(term);
    assert!(text.starts_with(WELCOME));
    assert!(text.contains("Game Mode 1: Best of 3 mini-rounds"));
    assert_eq!(text.matches(DRAW_PROMPT).count(), 3);
    for number in 1..=3 {
        assert!(text.contains(&format!("\nMini-round {number}\n")));
    }
    assert!(text.contains("Score - You: 3 Computer: 0"));
    assert!(text.contains("Final Score - You: 3 Computer: 0\nYou won the game!"));
    assert!(text.ends_with("Thank you for playing!\nDone.\n"));
}

#[test]
fn sum_of_cards_game_with_round_pauses() {
    // 9 draw pauses plus 2 pauses between rounds.
    let mut term = scripted(&"\n".repeat(11));
    let options = GameOptions::default().with_mode(GameMode::SumOfCards);
    let result = console::run(&mut term, &options, &mut alternating(1, 13)).unwrap();

    assert_eq!(result.outcome, Outcome::Computer);
    assert_eq!((result.tally.player, result.tally.computer), (0, 3));

    let text = output(term);
    assert!(!text.contains(MODE_PROMPT));
    assert_eq!(text.matches(DRAW_PROMPT).count(), 9);
    assert_eq!(text.matches(NEXT_ROUND_PROMPT).count(), 2);
    assert_eq!(text.matches("Computer wins round").count(), 3);
    assert!(text.contains("Current sum - You: 3 Computer: 39"));
    assert!(text.contains("Computer won the game!"));
}

#[test]
fn unpaused_game_reads_no_input() {
    let mut term = scripted("");
    let options = GameOptions::default()
        .with_mode(GameMode::BestOfThree)
        .with_pause(false);
    let result = console::run(&mut term, &options, &mut constant(5)).unwrap();

    assert_eq!(result.outcome, Outcome::Tie);
    let text = output(term);
    assert_eq!(text.matches("Mini-round is a tie!").count(), 3);
    assert!(text.contains("The game is a tie!"));
}

#[test]
fn input_closing_mid_game_stops_the_run() {
    // Mode choice and a single ENTER, then nothing.
    let mut term = scripted("2\n\n");
    let err =
        console::run(&mut term, &GameOptions::default(), &mut constant(4)).unwrap_err();
    assert!(matches!(err, ConsoleError::Closed));

    let text = output(term);
    assert_eq!(text.matches("Current sum").count(), 1);
    assert!(!text.contains("Final Score"));
}

/// A writer whose every write fails.
struct Broken;

impl std::io::Write for Broken {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("terminal gone"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failures_are_reported_to_the_caller() {
    let mut term = Console::new(Cursor::new(Vec::new()), Broken);
    let err = term.say("\nInput closed. Exiting game.").unwrap_err();
    assert!(matches!(err, ConsoleError::Io(_)));
    assert!(err.to_string().contains("terminal gone"));
}
