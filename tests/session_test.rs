//! End-to-end sessions driven through scripted input.

use tictac_board::{Position, LINES};
use tictac_duel::{
    Console, ConsoleError, Outcome, Seat, Session, SessionError, SessionReport, StarterSelector,
};

/// Runs a session over `input` and returns its result and everything printed.
fn play(
    input: &str,
    starter: impl StarterSelector,
) -> (Result<SessionReport, SessionError>, String) {
    play_bytes(input.as_bytes(), starter)
}

/// Like [`play`], for input that need not be valid UTF-8.
fn play_bytes(
    input: &[u8],
    starter: impl StarterSelector,
) -> (Result<SessionReport, SessionError>, String) {
    let mut output = Vec::new();
    let console = Console::new(input, &mut output);
    let result = Session::new(console, starter).run();
    (result, String::from_utf8(output).expect("Output is UTF-8"))
}

const SETUP: &str = "1\nAnn\nX\nBob\nO\n";

#[test]
fn test_quit_from_main_menu() {
    let (result, output) = play("2\n", || Seat::First);
    let report = result.expect("Session ends cleanly");

    assert!(report.players().is_none());
    assert!(report.rounds().is_empty());
    assert!(output.contains("1. Start"));
    assert!(output.contains("2. Quit"));
    assert!(output.contains("Thanks for playing!"));
}

#[test]
fn test_first_player_wins_top_row() {
    let input = format!("{SETUP}1\n5\n2\n9\n3\n2\n");
    let (result, output) = play(&input, || Seat::First);
    let report = result.expect("Session ends cleanly");

    assert_eq!(report.rounds().len(), 1);
    let round = &report.rounds()[0];
    assert_eq!(
        *round.outcome(),
        Outcome::Win {
            winner: Seat::First,
            line: LINES[0],
        }
    );
    assert_eq!(report.winner_name(0), Some("Ann"));

    let rendered = round.board().render().to_string();
    assert_eq!(rendered.lines().next(), Some(" X | X | X "));

    let highlighted = "Winning line:\n X | X | X \n---+---+---\n   |   |   \n---+---+---\n   |   |   \n";
    assert!(output.contains(highlighted));
    assert!(output.contains("Ann wins!"));
    assert!(!output.contains("Bob wins!"));
}

#[test]
fn test_second_player_win_is_credited_to_mover() {
    // Ann: 1, 2, 9  Bob: 4, 5, 6
    let input = format!("{SETUP}1\n4\n2\n5\n9\n6\n2\n");
    let (result, output) = play(&input, || Seat::First);
    let report = result.expect("Session ends cleanly");

    assert_eq!(
        *report.rounds()[0].outcome(),
        Outcome::Win {
            winner: Seat::Second,
            line: LINES[1],
        }
    );
    assert_eq!(report.winner_name(0), Some("Bob"));
    assert!(output.contains("Bob wins!"));
    assert!(!output.contains("Ann wins!"));
}

#[test]
fn test_second_seat_can_start() {
    // Bob opens and takes the left column.
    let input = format!("{SETUP}1\n2\n4\n3\n7\n2\n");
    let (result, output) = play(&input, || Seat::Second);
    let report = result.expect("Session ends cleanly");

    assert!(output.contains("Bob goes first."));
    assert_eq!(*report.rounds()[0].starter(), Seat::Second);
    assert_eq!(
        *report.rounds()[0].outcome(),
        Outcome::Win {
            winner: Seat::Second,
            line: LINES[3],
        }
    );
}

#[test]
fn test_full_board_is_a_draw() {
    // X O X / O X X / O X O
    let input = format!("{SETUP}1\n2\n3\n4\n5\n7\n6\n9\n8\n2\n");
    let (result, output) = play(&input, || Seat::First);
    let report = result.expect("Session ends cleanly");

    let round = &report.rounds()[0];
    assert_eq!(*round.outcome(), Outcome::Draw);
    assert!(round.outcome().is_draw());
    assert!(round.outcome().winner().is_none());
    assert_eq!(report.winner_name(0), None);
    assert!(round.board().is_full());
    assert!(output.contains("It's a draw!"));
    assert!(!output.contains("wins!"));
}

#[test]
fn test_invalid_cells_are_reprompted_without_mutation() {
    // Ann tries "10" and "abc" before "5"; then Bob 1, Ann 4, Bob 2, Ann 6.
    let input = format!("{SETUP}10\nabc\n5\n1\n4\n2\n6\n2\n");
    let (result, output) = play(&input, || Seat::First);
    let report = result.expect("Session ends cleanly");

    assert!(output.contains("10 is not on the board"));
    assert!(output.contains("'abc' is not a number"));
    assert_eq!(output.matches("Ann (X), choose a cell (1-9): ").count(), 5);

    // The board shown to Bob holds only Ann's accepted move.
    let empty = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 ";
    let after_first = " 1 | 2 | 3 \n---+---+---\n 4 | X | 6 \n---+---+---\n 7 | 8 | 9 \nBob (O)";
    assert_eq!(output.matches(empty).count(), 1);
    assert!(output.contains(after_first));

    let round = &report.rounds()[0];
    assert_eq!(round.board().empty_positions().count(), 4);
    assert_eq!(report.winner_name(0), Some("Ann"));
}

#[test]
fn test_occupied_cell_is_reprompted() {
    // Bob tries Ann's 5, then plays 1 and 2; Ann wins the anti-diagonal.
    let input = format!("{SETUP}5\n5\n1\n3\n2\n7\n2\n");
    let (result, output) = play(&input, || Seat::First);
    let report = result.expect("Session ends cleanly");

    assert!(output.contains("Cell 5 is already taken"));
    assert_eq!(
        *report.rounds()[0].outcome(),
        Outcome::Win {
            winner: Seat::First,
            line: LINES[7],
        }
    );
    let board = report.rounds()[0].board();
    assert_eq!(board.get(Position::TopLeft).symbol().map(|s| s.as_char()), Some('O'));
    assert_eq!(report.winner_name(0), Some("Ann"));
}

#[test]
fn test_restart_keeps_players_and_reselects_starter() {
    let mut seats = vec![Seat::First, Seat::Second].into_iter();
    let starter = move || seats.next().unwrap_or(Seat::First);

    // Round 1: Ann opens and wins the top row. Restart.
    // Round 2: Bob opens and wins the middle row. Quit.
    let input = format!("{SETUP}1\n4\n2\n5\n3\n1\n4\n1\n5\n2\n6\n2\n");
    let (result, output) = play(&input, starter);
    let report = result.expect("Session ends cleanly");

    assert!(output.contains("1. Restart"));
    assert_eq!(report.rounds().len(), 2);
    assert_eq!(*report.rounds()[0].starter(), Seat::First);
    assert_eq!(*report.rounds()[1].starter(), Seat::Second);
    assert_eq!(report.winner_name(0), Some("Ann"));
    assert_eq!(report.winner_name(1), Some("Bob"));

    // Second round started from a cleared board.
    assert_eq!(report.rounds()[1].board().empty_positions().count(), 4);

    let players = report.players().as_ref().expect("Players were seated");
    assert_eq!(players[0].name(), "Ann");
    assert_eq!(players[1].symbol().as_char(), 'O');
}

#[test]
fn test_duplicate_symbol_rejected_case_insensitively() {
    let input = "1\nAnn\nx\nBob\nX\nO\n1\n4\n2\n5\n3\n2\n";
    let (result, output) = play(input, || Seat::First);
    let report = result.expect("Session ends cleanly");

    assert!(output.contains("Symbol X is already taken"));
    let players = report.players().as_ref().expect("Players were seated");
    assert_eq!(players[0].symbol().as_char(), 'X');
    assert_eq!(players[1].symbol().as_char(), 'O');
}

#[test]
fn test_input_closed_mid_game() {
    let input = format!("{SETUP}5\n");
    let (result, _output) = play(&input, || Seat::First);
    assert!(matches!(
        result,
        Err(SessionError::Console(ConsoleError::InputClosed))
    ));
}

#[test]
fn test_invalid_utf8_name_is_reprompted() {
    let input: &[u8] = b"1\nJos\xE9\nAnn\nx\nBob\no\n1\n5\n2\n9\n3\n2\n";
    let (result, output) = play_bytes(input, || Seat::First);
    let report = result.expect("Session ends cleanly");

    assert!(output.contains("Invalid name"));
    assert_eq!(output.matches("Player 1, enter your name: ").count(), 2);
    assert_eq!(report.winner_name(0), Some("Ann"));
}
