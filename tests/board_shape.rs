use pegsol::board::{Board, BoardError, Cell, Coord, CENTER};

#[test]
fn fresh_board_has_cross_shape() {
    let board = Board::new_game();
    for coord in Coord::all() {
        let in_corner_block = !Board::in_cross(coord.row(), coord.col());
        if in_corner_block {
            assert_eq!(board.get(coord), Cell::Unused, "corner cell {coord} must be unused");
        } else {
            assert_ne!(board.get(coord), Cell::Unused, "cross cell {coord} must be playable");
        }
    }
}

#[test]
fn corner_blocks_cover_exactly_the_four_3x3s() {
    for coord in Coord::all() {
        let row_arm = (3..=5).contains(&coord.row());
        let col_arm = (3..=5).contains(&coord.col());
        assert_eq!(Board::in_cross(coord.row(), coord.col()), row_arm || col_arm);
    }
    let playable = Coord::all()
        .filter(|c| Board::in_cross(c.row(), c.col()))
        .count();
    assert_eq!(playable, 45);
}

#[test]
fn fresh_board_center_empty_rest_pegged() {
    let board = Board::new_game();
    assert_eq!(board.get(CENTER), Cell::Empty);
    // Count derived by enumeration: every playable cell but the center.
    assert_eq!(board.peg_count() as usize, 45 - 1);
}

#[test]
fn cell_at_rejects_out_of_bounds() {
    let board = Board::new_game();
    assert_eq!(board.cell_at(9, 0), Err(BoardError::OutOfBounds { row: 9, col: 0 }));
    assert_eq!(board.cell_at(0, 9), Err(BoardError::OutOfBounds { row: 0, col: 9 }));
    assert_eq!(board.cell_at(4, 4), Ok(Cell::Empty));
}

#[test]
fn coord_construction_validates_range() {
    assert!(Coord::new(8, 8).is_ok());
    assert!(Coord::new(9, 4).is_err());
    assert!(Coord::new(4, 255).is_err());
}

#[test]
fn set_playable_rejects_corner_cells() {
    let mut board = Board::empty_cross();
    let corner = Coord::new(0, 0).unwrap();
    assert_eq!(board.set_playable(corner, Cell::Peg), Err(BoardError::NotPlayable(corner)));
    assert_eq!(board.get(corner), Cell::Unused);

    let arm = Coord::new(0, 3).unwrap();
    assert_eq!(board.set_playable(arm, Cell::Unused), Err(BoardError::NotPlayable(arm)));
    board.set_playable(arm, Cell::Peg).unwrap();
    assert_eq!(board.get(arm), Cell::Peg);
}
