//! Fixed-layout save codec.
//!
//! Record layout, 86 bytes, no header and no checksum:
//!   81 cell bytes row-major ('N' unused, ' ' empty, 'X' peg)
//!   1 peg-count byte
//!   cursor row, cursor col
//!   selected row, selected col (0xFF 0xFF = no selection)

use crate::board::{Board, Cell, Coord, BOARD_SIZE};
use std::io;
use std::path::Path;

/// Default file name, one fixed literal per game variant.
pub const SAVE_FILE: &str = "peg_solitaire.save";

pub const RECORD_SIZE: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize) + 5;

const CELL_UNUSED: u8 = b'N';
const CELL_EMPTY: u8 = b' ';
const CELL_PEG: u8 = b'X';
const NO_SELECTION: u8 = 0xFF;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("corrupt save data: {0}")]
    Corrupt(&'static str),
    #[error("save file not found")]
    NotFound,
    #[error("save file i/o: {0}")]
    Io(#[from] io::Error),
}

/// Wholesale snapshot of a game, exactly what goes on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedGame {
    pub board: Board,
    pub pegs: u8,
    pub cursor: Coord,
    pub selection: Option<Coord>,
}

pub fn encode(saved: &SavedGame) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    for (i, coord) in Coord::all().enumerate() {
        buf[i] = match saved.board.get(coord) {
            Cell::Unused => CELL_UNUSED,
            Cell::Empty => CELL_EMPTY,
            Cell::Peg => CELL_PEG,
        };
    }
    let n = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);
    buf[n] = saved.pegs;
    buf[n + 1] = saved.cursor.row();
    buf[n + 2] = saved.cursor.col();
    match saved.selection {
        Some(sel) => {
            buf[n + 3] = sel.row();
            buf[n + 4] = sel.col();
        }
        None => {
            buf[n + 3] = NO_SELECTION;
            buf[n + 4] = NO_SELECTION;
        }
    }
    buf
}

/// All-or-nothing decode: any malformed field fails the whole record and
/// the caller's in-memory state stays untouched.
pub fn decode(bytes: &[u8]) -> Result<SavedGame, SaveError> {
    if bytes.len() != RECORD_SIZE {
        return Err(SaveError::Corrupt("record length"));
    }

    let mut board = Board::empty_cross();
    for (i, coord) in Coord::all().enumerate() {
        let cell = match bytes[i] {
            CELL_UNUSED => Cell::Unused,
            CELL_EMPTY => Cell::Empty,
            CELL_PEG => Cell::Peg,
            _ => return Err(SaveError::Corrupt("unknown cell byte")),
        };
        let playable = Board::in_cross(coord.row(), coord.col());
        match cell {
            Cell::Unused if playable => return Err(SaveError::Corrupt("board shape")),
            Cell::Unused => {}
            _ if !playable => return Err(SaveError::Corrupt("board shape")),
            _ => board
                .set_playable(coord, cell)
                .map_err(|_| SaveError::Corrupt("board shape"))?,
        }
    }

    let n = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);
    let pegs = bytes[n];
    if pegs != board.peg_count() {
        return Err(SaveError::Corrupt("peg count mismatch"));
    }

    let cursor = Coord::new(bytes[n + 1], bytes[n + 2])
        .map_err(|_| SaveError::Corrupt("cursor out of range"))?;

    let selection = match (bytes[n + 3], bytes[n + 4]) {
        (NO_SELECTION, NO_SELECTION) => None,
        (row, col) => {
            let sel = Coord::new(row, col)
                .map_err(|_| SaveError::Corrupt("selection out of range"))?;
            if board.get(sel) != Cell::Peg {
                return Err(SaveError::Corrupt("selection not a peg"));
            }
            Some(sel)
        }
    };

    Ok(SavedGame { board, pegs, cursor, selection })
}

pub fn save_game(path: &Path, saved: &SavedGame) -> Result<(), SaveError> {
    std::fs::write(path, encode(saved))?;
    log::debug!("saved game to {}", path.display());
    Ok(())
}

pub fn load_game(path: &Path) -> Result<SavedGame, SaveError> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(SaveError::NotFound),
        Err(e) => return Err(SaveError::Io(e)),
    };
    let saved = decode(&bytes)?;
    log::debug!("loaded game from {}", path.display());
    Ok(saved)
}
