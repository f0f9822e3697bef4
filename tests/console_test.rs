//! Tests for console prompts and their re-prompt loops.

use tictac_board::{Board, Player, Position, Symbol};
use tictac_duel::{Choice, ChoiceError, Console, ConsoleError};

fn console(input: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(input.as_bytes(), Vec::new())
}

fn printed(console: &Console<&[u8], Vec<u8>>) -> String {
    String::from_utf8(console.output().clone()).expect("Output is UTF-8")
}

#[test]
fn test_choice_parse() {
    assert_eq!(Choice::parse("1"), Ok(Choice::Play));
    assert_eq!(Choice::parse(" 2 "), Ok(Choice::Quit));
    assert!(matches!(Choice::parse("3"), Err(ChoiceError::OutOfRange(_))));
    assert!(matches!(Choice::parse("0"), Err(ChoiceError::OutOfRange(_))));
    assert!(matches!(Choice::parse("one"), Err(ChoiceError::NotANumber(_))));
    assert!(matches!(Choice::parse(""), Err(ChoiceError::NotANumber(_))));
}

#[test]
fn test_main_menu_reprompts() {
    let mut console = console("abc\n3\n\n1\n");
    assert_eq!(console.main_menu().unwrap(), Choice::Play);

    let text = printed(&console);
    assert!(text.contains("1. Start"));
    assert!(text.contains("'abc' is not a number"));
    assert!(text.contains("3 is not an option"));
    assert_eq!(text.matches("Enter your choice: ").count(), 4);
}

#[test]
fn test_endgame_menu() {
    let mut console = console("2\n");
    assert_eq!(console.endgame_menu().unwrap(), Choice::Quit);
    let text = printed(&console);
    assert!(text.contains("1. Restart"));
    assert!(text.contains("2. Quit"));
}

#[test]
fn test_name_reprompts_until_alphabetic() {
    let mut console = console("\nR2D2\nAnn Lee\n  Ann  \n");
    assert_eq!(console.choose_name("Player 1").unwrap(), "Ann");
    let text = printed(&console);
    assert_eq!(text.matches("Invalid name").count(), 3);
}

#[test]
fn test_symbol_reprompts_and_uppercases() {
    let forbidden = Symbol::parse("X").ok();
    let mut console = console("xo\n7\nx\nq\n");
    let symbol = console.choose_symbol("Bob", forbidden).unwrap();
    assert_eq!(symbol.as_char(), 'Q');

    let text = printed(&console);
    assert!(text.contains("Expected a single letter"));
    assert!(text.contains("'7' is not a letter"));
    assert!(text.contains("Symbol X is already taken"));
}

#[test]
fn test_name_with_invalid_utf8_is_reprompted() {
    let mut console = Console::new(&b"Jos\xE9\r\nJose\r\n"[..], Vec::new());
    assert_eq!(console.choose_name("Player 1").unwrap(), "Jose");
    assert_eq!(printed(&console).matches("Invalid name").count(), 1);
}

#[test]
fn test_choose_player() {
    let mut console = console("Bob\no\n");
    let player = console.choose_player("Player 2", Symbol::parse("X").ok()).unwrap();
    assert_eq!(player, Player::new("Bob", Symbol::parse("O").unwrap()).unwrap());
}

#[test]
fn test_cell_choice_skips_occupied() {
    let player = Player::new("Ann", Symbol::parse("X").unwrap()).unwrap();
    let mut board = Board::new();
    board.place(Position::Center, Symbol::parse("O").unwrap()).unwrap();

    let mut console = console("10\nabc\n5\n6\n");
    assert_eq!(console.choose_cell(&player, &board).unwrap(), Position::MiddleRight);

    let text = printed(&console);
    assert!(text.contains("10 is not on the board"));
    assert!(text.contains("'abc' is not a number"));
    assert!(text.contains("Cell 5 is already taken"));
}

#[test]
fn test_closed_input_is_an_error() {
    let mut console = console("");
    assert!(matches!(console.main_menu(), Err(ConsoleError::InputClosed)));
}

#[test]
fn test_clear_screen_only_when_enabled() {
    let mut quiet = console("");
    quiet.clear().unwrap();
    assert!(quiet.output().is_empty());

    let mut clearing = console("").with_clear_screen(true);
    clearing.clear().unwrap();
    assert!(printed(&clearing).contains("\x1b[2J"));
}
