#![cfg(feature = "std")]

use seabattle::ui::{
    cell_at_pixel, draw_command, outcome_message, parse_command, parse_target, render_board,
    stats_line, Command, DrawCommand, CELL_SIZE_PX,
};
use seabattle::{Board, Coord, Direction, Outcome, SessionStats, ShipId};

#[test]
fn test_pixel_translation() {
    assert_eq!(cell_at_pixel(0.0, 0.0, CELL_SIZE_PX), Some((0, 0)));
    assert_eq!(cell_at_pixel(45.0, 70.0, CELL_SIZE_PX), Some((1, 2)));
    assert_eq!(cell_at_pixel(299.9, 300.0, CELL_SIZE_PX), Some((9, 10)));
    assert_eq!(cell_at_pixel(-0.5, 12.0, CELL_SIZE_PX), Some((-1, 0)));
}

#[test]
fn test_non_finite_pixels_are_rejected() {
    assert_eq!(cell_at_pixel(f64::NAN, 10.0, CELL_SIZE_PX), None);
    assert_eq!(cell_at_pixel(10.0, f64::INFINITY, CELL_SIZE_PX), None);
    assert_eq!(parse_command("click NaN NaN"), None);
    assert_eq!(parse_command("click inf 3"), None);
    assert_eq!(parse_command("click 3 -inf"), None);
}

#[test]
fn test_extreme_rows_do_not_overflow() {
    assert_eq!(parse_target("B-9223372036854775808"), None);
    assert_eq!(parse_target("B9223372036854775807"), Some((1, i64::MAX - 1)));
    assert_eq!(parse_target("B99999999999999999999"), None);
    assert_eq!(
        parse_command("A-9223372036854775807"),
        Some(Command::Fire(0, i64::MIN))
    );
}

#[test]
fn test_parse_targets_and_commands() {
    assert_eq!(parse_target("B3"), Some((1, 2)));
    assert_eq!(parse_target(" j10 "), Some((9, 9)));
    assert_eq!(parse_target("3B"), None);
    assert_eq!(parse_target("B"), None);

    assert_eq!(parse_command("a1"), Some(Command::Fire(0, 0)));
    assert_eq!(parse_command("click 45 70"), Some(Command::Fire(1, 2)));
    assert_eq!(parse_command("click 45"), None);
    assert_eq!(parse_command("NEW"), Some(Command::NewGame));
    assert_eq!(parse_command("quit"), Some(Command::Quit));
    assert_eq!(parse_command("fire!"), None);
}

#[test]
fn test_draw_commands_follow_cell_state() {
    let mut board = Board::new(4);
    board.place(ShipId(1), 1, Coord::new(1, 1), Direction::Right).unwrap();

    let ship = Coord::new(1, 1);
    let neighbor = Coord::new(2, 2);
    let water = Coord::new(3, 3);
    assert_eq!(draw_command(board.cell(ship).unwrap()), DrawCommand::Hidden);

    board.fire_at(ship);
    board.fire_at(neighbor);
    board.fire_at(water);
    assert_eq!(draw_command(board.cell(ship).unwrap()), DrawCommand::Cross);
    assert_eq!(draw_command(board.cell(neighbor).unwrap()), DrawCommand::Dot);
    assert_eq!(draw_command(board.cell(water).unwrap()), DrawCommand::Dot);

    let text = render_board(&board);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0].trim(), "A B C D");
    assert_eq!(lines[2], " 2  . X . .");
    assert_eq!(lines[3], " 3  . . o .");
}

#[test]
fn test_stats_line_and_messages() {
    let stats = SessionStats {
        shots: 3,
        hits: 1,
        remaining_ships: 10,
        last_shot: Some(Coord::new(1, 2)),
    };
    assert_eq!(
        stats_line(&stats),
        "Ships left: 10 | Shots: 3 | Last shot: B, 3 | Accuracy: 33.33 %"
    );
    assert_eq!(
        outcome_message(Outcome::NewRecord, 17),
        "Congratulations, new record: only 17 shots"
    );
    assert_eq!(outcome_message(Outcome::NormalWin, 20), "All ships destroyed");
}
