#![cfg(feature = "std")]

//! Terminal presentation and pointer translation. The core never draws; this
//! module maps cell state onto drawing instructions.

use std::fmt::Write as _;

use crate::{
    board::Board,
    cell::{Cell, CellKind},
    common::column_name,
    game::{GameSession, Outcome, SessionStats},
};

/// Pixel edge length of one cell on the drawing surface.
pub const CELL_SIZE_PX: f64 = 30.0;

/// Translate a pointer position into (column, row) indices.
/// Positions left of or above the grid give negative indices; non-finite
/// positions give `None`.
pub fn cell_at_pixel(x: f64, y: f64, cell_size: f64) -> Option<(i64, i64)> {
    let (col, row) = (x / cell_size, y / cell_size);
    if !col.is_finite() || !row.is_finite() {
        return None;
    }
    Some((col.floor() as i64, row.floor() as i64))
}

/// What to draw for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Untouched water tile.
    Hidden,
    /// Diagonal cross over a hit deck.
    Cross,
    /// Small circle marking open water.
    Dot,
}

pub fn draw_command(cell: &Cell) -> DrawCommand {
    if !cell.is_revealed() {
        return DrawCommand::Hidden;
    }
    match cell.kind() {
        CellKind::Ship(_) => DrawCommand::Cross,
        CellKind::Water | CellKind::Neighbor => DrawCommand::Dot,
    }
}

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(i64, i64),
    NewGame,
    Quit,
}

/// Parse `B3`, `click X Y` (pixels), `new` or `quit`.
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Some(Command::Quit),
        "n" | "new" | "restart" => return Some(Command::NewGame),
        _ => {}
    }
    let mut words = input.split_whitespace();
    if words.next().is_some_and(|w| w.eq_ignore_ascii_case("click")) {
        let x: f64 = words.next()?.parse().ok()?;
        let y: f64 = words.next()?.parse().ok()?;
        if words.next().is_some() {
            return None;
        }
        let (col, row) = cell_at_pixel(x, y, CELL_SIZE_PX)?;
        return Some(Command::Fire(col, row));
    }
    parse_target(input).map(|(col, row)| Command::Fire(col, row))
}

/// Parse a `B3` style target into 0-based (column, row). The row may be out of
/// range; the session decides what a valid cell is.
pub fn parse_target(input: &str) -> Option<(i64, i64)> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let row: i64 = chars.as_str().parse().ok()?;
    Some(((col_ch as u8 - b'A') as i64, row.checked_sub(1)?))
}

fn glyph(cell: &Cell) -> char {
    match draw_command(cell) {
        DrawCommand::Hidden => '.',
        DrawCommand::Cross => 'X',
        DrawCommand::Dot => 'o',
    }
}

/// Render the board with lettered columns and numbered rows.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from("   ");
    for c in 0..size {
        let _ = write!(out, " {}", column_name(c));
    }
    out.push('\n');
    for r in 0..size {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..size {
            let ch = board
                .cell(crate::common::Coord::new(c, r))
                .map(glyph)
                .unwrap_or(' ');
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// One-line stats panel: ships left, shots, last shot, accuracy.
pub fn stats_line(stats: &SessionStats) -> String {
    let last = stats.last_shot.map(|c| c.label()).unwrap_or_default();
    let accuracy = stats
        .accuracy()
        .map(|a| format!("{:.2} %", a))
        .unwrap_or_default();
    format!(
        "Ships left: {} | Shots: {} | Last shot: {} | Accuracy: {}",
        stats.remaining_ships, stats.shots, last, accuracy
    )
}

pub fn outcome_message(outcome: Outcome, shots: u32) -> String {
    match outcome {
        Outcome::NewRecord => format!("Congratulations, new record: only {} shots", shots),
        Outcome::TiedRecord => format!(
            "All ships destroyed, you repeated absolute record with {} shots",
            shots
        ),
        Outcome::NormalWin => "All ships destroyed".to_string(),
    }
}

pub fn print_session(session: &GameSession) {
    println!("{}", render_board(session.board()));
    println!("{}", stats_line(&session.stats()));
}
