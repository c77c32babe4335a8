use std::fmt;

pub const BOARD_SIZE: u8 = 9;

/// The winning cell: a lone peg must come to rest here.
pub const CENTER: Coord = Coord { row: 4, col: 4 };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Not part of the cross (the four 3x3 corner blocks).
    Unused,
    /// Playable, no peg.
    Empty,
    /// Playable, occupied.
    Peg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("coordinate ({row}, {col}) is outside the 9x9 grid")]
    OutOfBounds { row: u8, col: u8 },
    #[error("cell {0} is not part of the cross")]
    NotPlayable(Coord),
}

/// A validated (row, col) pair, both in [0, 8].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coord {
    pub(crate) row: u8,
    pub(crate) col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Iterate the whole 9x9 grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }

    /// Step `n` cells in direction `d`; None if that leaves the grid.
    pub fn step(self, d: Direction, n: u8) -> Option<Coord> {
        let (dr, dc) = d.delta();
        let row = self.row as i16 + dr as i16 * n as i16;
        let col = self.col as i16 + dc as i16 * n as i16;
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Coord { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// The 9x9 grid. Shape invariant: a cell is `Unused` exactly when it lies in
/// one of the four corner blocks, and those cells are never written after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Whether (row, col) lies on the cross, i.e. outside the corner blocks.
    pub fn in_cross(row: u8, col: u8) -> bool {
        let arm = |x: u8| (3..=5).contains(&x);
        arm(row) || arm(col)
    }

    /// Fresh game: every cross cell holds a peg except the center.
    pub fn new_game() -> Self {
        let mut board = Self::fill(Cell::Peg);
        board.cells[CENTER.row as usize][CENTER.col as usize] = Cell::Empty;
        board
    }

    /// All cross cells empty. Starting point for the codec and for setting
    /// up positions by hand.
    pub fn empty_cross() -> Self {
        Self::fill(Cell::Empty)
    }

    fn fill(playable: Cell) -> Self {
        let mut cells = [[Cell::Unused; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for c in Coord::all() {
            if Self::in_cross(c.row, c.col) {
                cells[c.row as usize][c.col as usize] = playable;
            }
        }
        Self { cells }
    }

    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row as usize][coord.col as usize]
    }

    pub fn cell_at(&self, row: u8, col: u8) -> Result<Cell, BoardError> {
        Coord::new(row, col).map(|c| self.get(c))
    }

    /// Shape-preserving write for playable cells. Used by the codec and for
    /// building test positions; play-time mutation goes through the engine.
    pub fn set_playable(&mut self, coord: Coord, cell: Cell) -> Result<(), BoardError> {
        if cell == Cell::Unused || !Self::in_cross(coord.row, coord.col) {
            return Err(BoardError::NotPlayable(coord));
        }
        self.cells[coord.row as usize][coord.col as usize] = cell;
        Ok(())
    }

    /// Raw write, restricted to the engine which only touches validated
    /// playable cells.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row as usize][coord.col as usize] = cell;
    }

    /// Number of cells currently holding a peg, by enumeration.
    pub fn peg_count(&self) -> u8 {
        Coord::all().filter(|&c| self.get(c) == Cell::Peg).count() as u8
    }
}
