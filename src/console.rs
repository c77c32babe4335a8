//! Plain-text input adapter: one command per line, board redrawn after any
//! action that changes what the player sees. Owns the cursor; the core only
//! ever receives coordinates.

use crate::board::{Board, Cell, Coord, Direction, BOARD_SIZE, CENTER};
use crate::game::{Event, GameState, GameStatus, InvalidMove};
use crate::save;
use std::io::{self, BufRead};
use std::path::PathBuf;

const HEADER: &str = "    0   1   2   3   4   5   6   7   8";
const SHORT_BORDER: &str = "              +---+---+---+";
const FULL_BORDER: &str = "  +---+---+---+---+---+---+---+---+---+";

pub struct Console {
    state: GameState,
    cursor: Coord,
    save_path: PathBuf,
}

impl Console {
    pub fn new(save_path: PathBuf) -> Self {
        Self {
            state: GameState::new_game(),
            cursor: CENTER,
            save_path,
        }
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        println!("Peg solitaire. Type 'help' for commands.");
        self.draw();
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "quit" || line == "q" {
                break;
            }
            self.dispatch(line);
        }
        Ok(())
    }

    fn dispatch(&mut self, line: &str) {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("help") => print_help(),
            Some("new") => {
                self.state = GameState::new_game();
                self.cursor = CENTER;
                self.draw();
                println!("New game initialized");
            }
            Some("board") | Some("show") => self.draw(),
            Some("up") => self.move_cursor(Direction::Up),
            Some("down") => self.move_cursor(Direction::Down),
            Some("left") => self.move_cursor(Direction::Left),
            Some("right") => self.move_cursor(Direction::Right),
            Some("select") => match (tokens.next(), tokens.next()) {
                (Some(row), Some(col)) => {
                    match (row.parse::<u8>(), col.parse::<u8>()) {
                        (Ok(row), Ok(col)) => match Coord::new(row, col) {
                            Ok(coord) => self.apply_select(coord),
                            Err(e) => println!("{e}"),
                        },
                        _ => println!("Usage: select [ROW COL]"),
                    }
                }
                // Bare 'select' acts at the cursor.
                (None, None) => self.apply_select(self.cursor),
                _ => println!("Usage: select [ROW COL]"),
            },
            Some("deselect") => {
                self.state.deselect();
                println!("Peg deselected");
            }
            Some("save") => match save::save_game(&self.save_path, &self.state.to_saved(self.cursor)) {
                Ok(()) => println!("Game saved"),
                Err(e) => println!("Game not saved: {e}"),
            },
            Some("load") => match save::load_game(&self.save_path) {
                Ok(saved) => {
                    let (state, cursor) = GameState::from_saved(saved);
                    self.state = state;
                    self.cursor = cursor;
                    self.draw();
                    println!("Game loaded");
                }
                // Failed loads never touch the in-memory game.
                Err(e) => println!("Error, game not loaded: {e}"),
            },
            _ => println!("Unknown command, type 'help'"),
        }
    }

    fn apply_select(&mut self, coord: Coord) {
        self.cursor = coord;
        let event = self.state.select(coord);
        self.draw();
        self.report(event);
    }

    fn report(&self, event: Event) {
        match event {
            Event::Selected => println!("Peg selected"),
            Event::Deselected => println!("Peg deselected"),
            Event::EmptyBlock => println!("Empty block"),
            Event::Captured { remaining, won } => {
                println!("Pegs left: {remaining}");
                if won {
                    println!("Congratulations, you have solved the puzzle");
                } else if self.state.status() == GameStatus::Stalemate {
                    println!("Stale mate, no moves possible");
                }
            }
            Event::Invalid(reason) => println!("{}", invalid_msg(reason)),
        }
    }

    /// Move the cursor one cell, wrapping within the playable cells of the
    /// current row/column like the original terminal cursor did.
    fn move_cursor(&mut self, d: Direction) {
        let (dr, dc) = d.delta();
        let (row, col) = (self.cursor.row(), self.cursor.col());
        let line: Vec<Coord> = if dr != 0 {
            (0..BOARD_SIZE)
                .filter(|&r| Board::in_cross(r, col))
                .map(|r| Coord { row: r, col })
                .collect()
        } else {
            (0..BOARD_SIZE)
                .filter(|&c| Board::in_cross(row, c))
                .map(|c| Coord { row, col: c })
                .collect()
        };
        let here = if dr != 0 { row } else { col };
        let idx = line
            .iter()
            .position(|c| (if dr != 0 { c.row() } else { c.col() }) == here)
            .unwrap_or(0);
        let step = (dr + dc) as i32;
        let next = (idx as i32 + step).rem_euclid(line.len() as i32) as usize;
        self.cursor = line[next];
        self.draw();
    }

    fn draw(&self) {
        println!("{}", render(self.state.board(), self.cursor, self.state.selection()));
        println!(
            "Pegs: {}  Cursor: {}  Status: {:?}",
            self.state.pegs(),
            self.cursor,
            self.state.status()
        );
    }
}

/// Draw the cross with '[ ]' around the cursor cell and '( )' around the
/// selected peg.
fn render(board: &Board, cursor: Coord, selection: Option<Coord>) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    let full = |row: u8| (3..=5).contains(&row);
    for row in 0..BOARD_SIZE {
        if full(row) || (row > 0 && full(row - 1)) {
            out.push_str(FULL_BORDER);
        } else {
            out.push_str(SHORT_BORDER);
        }
        out.push('\n');

        let cols: std::ops::RangeInclusive<u8> = if full(row) { 0..=8 } else { 3..=5 };
        out.push_str(&row.to_string());
        out.push_str(if full(row) { " " } else { "             " });
        for col in cols {
            let coord = Coord { row, col };
            let ch = match board.get(coord) {
                Cell::Peg => 'X',
                _ => ' ',
            };
            let (l, r) = if coord == cursor {
                ('[', ']')
            } else if selection == Some(coord) {
                ('(', ')')
            } else {
                (' ', ' ')
            };
            out.push('|');
            out.push(l);
            out.push(ch);
            out.push(r);
        }
        out.push('|');
        out.push_str(if full(row) { " " } else { "             " });
        out.push_str(&row.to_string());
        out.push('\n');
    }
    out.push_str(SHORT_BORDER);
    out.push('\n');
    out.push_str(HEADER);
    out
}

fn invalid_msg(reason: InvalidMove) -> &'static str {
    match reason {
        InvalidMove::NotAPeg => "No peg there to move",
        InvalidMove::DestinationOccupiedOrUnused => "Landing cell is not empty",
        InvalidMove::NotInLine => "Jumps must be horizontal or vertical",
        InvalidMove::WrongDistance => "Jumps must be exactly two cells",
        InvalidMove::NoPegToCapture => "No peg to capture in between",
        InvalidMove::AnotherPegAlreadySelected => "Cannot select another peg",
    }
}

fn print_help() {
    println!(
        "Commands:\n  select ROW COL  pick a peg / land a jump\n  select          act at the cursor\n  up down left right  move the cursor\n  deselect        drop the current selection\n  new             start over\n  save / load     write / read the save file\n  board           redraw\n  quit            exit"
    );
}
