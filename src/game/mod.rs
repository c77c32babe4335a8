use crate::board::{Board, Cell, Coord, CENTER};
use crate::save::SavedGame;

pub mod stalemate;

/// Below this many pegs a dead position becomes reachable; above it the
/// cross is connected enough that a capture always exists, so the scan is
/// skipped entirely.
pub const STALEMATE_SCAN_THRESHOLD: u8 = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// One peg left, resting on the center cell.
    Won,
    /// No legal capture exists (or a lone peg stranded off-center).
    Stalemate,
}

/// Why a select/jump was rejected. User-facing and non-fatal; the game
/// state is unchanged when one of these comes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    NotAPeg,
    DestinationOccupiedOrUnused,
    NotInLine,
    WrongDistance,
    NoPegToCapture,
    AnotherPegAlreadySelected,
}

/// What happened in response to a player action, for the adapter to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Selected,
    Deselected,
    EmptyBlock,
    Captured { remaining: u8, won: bool },
    Invalid(InvalidMove),
}

/// Owned game aggregate: board, derived peg count, in-progress selection
/// and the status computed after the last capture. The only mutation paths
/// during play are `select`/`attempt_jump`/`deselect`.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    pegs: u8,
    selection: Option<Coord>,
    status: GameStatus,
}

impl GameState {
    pub fn new_game() -> Self {
        Self::from_board(Board::new_game())
    }

    /// Adopt an arbitrary position. Peg count is derived by enumeration and
    /// the status classified up front, so loaded or hand-built boards start
    /// consistent.
    pub fn from_board(board: Board) -> Self {
        let pegs = board.peg_count();
        let mut state = Self {
            board,
            pegs,
            selection: None,
            status: GameStatus::Ongoing,
        };
        state.status = state.classify();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pegs(&self) -> u8 {
        self.pegs
    }

    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// One player action aimed at `coord`: picks a peg, deselects it, or
    /// (with a peg already selected and an empty target) tries the jump.
    pub fn select(&mut self, coord: Coord) -> Event {
        match (self.board.get(coord), self.selection) {
            (Cell::Peg, None) => {
                self.selection = Some(coord);
                Event::Selected
            }
            (Cell::Peg, Some(sel)) if sel == coord => {
                self.selection = None;
                Event::Deselected
            }
            // Switching the active peg directly is not allowed; deselect first.
            (Cell::Peg, Some(_)) => Event::Invalid(InvalidMove::AnotherPegAlreadySelected),
            (_, Some(origin)) => self.attempt_jump(origin, coord),
            (_, None) => Event::EmptyBlock,
        }
    }

    pub fn deselect(&mut self) -> Event {
        self.selection = None;
        Event::Deselected
    }

    /// Validate a jump and, if legal, apply the capture: origin and midpoint
    /// are emptied, the destination gains the peg, the count drops by one
    /// and the selection clears. Exactly one capture per call.
    pub fn attempt_jump(&mut self, origin: Coord, dest: Coord) -> Event {
        let mid = match self.validate_jump(origin, dest) {
            Ok(mid) => mid,
            Err(reason) => return Event::Invalid(reason),
        };

        self.board.set(origin, Cell::Empty);
        self.board.set(mid, Cell::Empty);
        self.board.set(dest, Cell::Peg);
        if self.pegs > 1 {
            self.pegs -= 1;
        }
        self.selection = None;
        log::debug!("captured {} jumping {} -> {}, {} pegs left", mid, origin, dest, self.pegs);

        self.status = self.classify();
        match self.status {
            GameStatus::Won => log::info!("puzzle solved"),
            GameStatus::Stalemate => log::info!("stalemate with {} pegs left", self.pegs),
            GameStatus::Ongoing => {}
        }
        Event::Captured {
            remaining: self.pegs,
            won: self.status == GameStatus::Won,
        }
    }

    /// Preconditions in order; the first failure decides the outcome.
    fn validate_jump(&self, origin: Coord, dest: Coord) -> Result<Coord, InvalidMove> {
        if self.board.get(origin) != Cell::Peg {
            return Err(InvalidMove::NotAPeg);
        }
        if self.board.get(dest) != Cell::Empty {
            return Err(InvalidMove::DestinationOccupiedOrUnused);
        }
        let dr = (origin.row() as i16 - dest.row() as i16).abs();
        let dc = (origin.col() as i16 - dest.col() as i16).abs();
        if dr != 0 && dc != 0 {
            return Err(InvalidMove::NotInLine);
        }
        if dr + dc != 2 {
            return Err(InvalidMove::WrongDistance);
        }
        let mid = Coord {
            row: (origin.row + dest.row) / 2,
            col: (origin.col + dest.col) / 2,
        };
        if self.board.get(mid) != Cell::Peg {
            return Err(InvalidMove::NoPegToCapture);
        }
        Ok(mid)
    }

    /// Status after a capture (and on adoption of a position). Runs the
    /// board scan only once the count is low enough to matter.
    fn classify(&self) -> GameStatus {
        if self.pegs == 1 {
            return if self.board.get(CENTER) == Cell::Peg {
                GameStatus::Won
            } else {
                GameStatus::Stalemate
            };
        }
        if self.pegs <= STALEMATE_SCAN_THRESHOLD && !stalemate::has_any_legal_move(&self.board) {
            return GameStatus::Stalemate;
        }
        GameStatus::Ongoing
    }

    /// Snapshot for the persistence codec. The cursor belongs to the input
    /// adapter; the core never stores it but the save record carries it.
    pub fn to_saved(&self, cursor: Coord) -> SavedGame {
        SavedGame {
            board: self.board.clone(),
            pegs: self.pegs,
            cursor,
            selection: self.selection,
        }
    }

    /// Rebuild from a decoded record, handing the cursor back to the adapter.
    pub fn from_saved(saved: SavedGame) -> (Self, Coord) {
        let mut state = Self::from_board(saved.board);
        state.selection = saved.selection;
        (state, saved.cursor)
    }
}
