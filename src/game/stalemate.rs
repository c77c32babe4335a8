//! Dead-position detection: does any legal capture exist anywhere?

use crate::board::{Board, Cell, Coord, Direction};

/// One legal capture: the peg at `origin` lands on `dest`, removing the peg
/// between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jump {
    pub origin: Coord,
    pub dest: Coord,
}

/// True as soon as one peg has an axis-aligned 2-cell jump: an adjacent peg
/// with an empty landing cell beyond it. Directions that leave the grid or
/// land on `Unused` are simply not candidates.
pub fn has_any_legal_move(board: &Board) -> bool {
    Coord::all().any(|origin| {
        board.get(origin) == Cell::Peg
            && Direction::ALL.iter().any(|&d| jump_dest(board, origin, d).is_some())
    })
}

/// Every legal capture on the board, scan order row-major then
/// up/down/left/right.
pub fn legal_jumps(board: &Board) -> Vec<Jump> {
    let mut jumps = Vec::new();
    for origin in Coord::all() {
        if board.get(origin) != Cell::Peg {
            continue;
        }
        for d in Direction::ALL {
            if let Some(dest) = jump_dest(board, origin, d) {
                jumps.push(Jump { origin, dest });
            }
        }
    }
    jumps
}

fn jump_dest(board: &Board, origin: Coord, d: Direction) -> Option<Coord> {
    let over = origin.step(d, 1)?;
    let dest = origin.step(d, 2)?;
    (board.get(over) == Cell::Peg && board.get(dest) == Cell::Empty).then_some(dest)
}
