use pegsol::board::Coord;
use pegsol::game::{Event, GameState, InvalidMove};

fn coord(row: u8, col: u8) -> Coord {
    Coord::new(row, col).unwrap()
}

#[test]
fn selecting_a_peg_sets_the_selection() {
    let mut state = GameState::new_game();
    assert_eq!(state.select(coord(2, 4)), Event::Selected);
    assert_eq!(state.selection(), Some(coord(2, 4)));
}

#[test]
fn reselecting_the_same_peg_deselects() {
    let mut state = GameState::new_game();
    state.select(coord(2, 4));
    assert_eq!(state.select(coord(2, 4)), Event::Deselected);
    assert_eq!(state.selection(), None);
}

#[test]
fn selecting_the_empty_center_is_a_noop() {
    let mut state = GameState::new_game();
    assert_eq!(state.select(coord(4, 4)), Event::EmptyBlock);
    assert_eq!(state.selection(), None);
}

#[test]
fn cannot_switch_to_another_peg_without_deselecting() {
    let mut state = GameState::new_game();
    state.select(coord(2, 4));
    assert_eq!(
        state.select(coord(3, 4)),
        Event::Invalid(InvalidMove::AnotherPegAlreadySelected)
    );
    // Selection unchanged: the active peg must be dropped explicitly.
    assert_eq!(state.selection(), Some(coord(2, 4)));
    assert_eq!(state.deselect(), Event::Deselected);
    assert_eq!(state.select(coord(3, 4)), Event::Selected);
}

#[test]
fn selecting_an_empty_cell_with_a_selection_attempts_the_jump() {
    let mut state = GameState::new_game();
    let initial = state.pegs();
    state.select(coord(2, 4));
    assert_eq!(
        state.select(coord(4, 4)),
        Event::Captured { remaining: initial - 1, won: false }
    );
    // A capture clears the selection automatically.
    assert_eq!(state.selection(), None);
}

#[test]
fn failed_jump_keeps_the_selection() {
    let mut state = GameState::new_game();
    state.select(coord(1, 4));
    assert_eq!(
        state.select(coord(4, 4)),
        Event::Invalid(InvalidMove::WrongDistance)
    );
    assert_eq!(state.selection(), Some(coord(1, 4)));
}

#[test]
fn select_on_an_unused_cell_without_selection_is_a_noop() {
    let mut state = GameState::new_game();
    assert_eq!(state.select(coord(0, 0)), Event::EmptyBlock);
    assert_eq!(state.selection(), None);
}

#[test]
fn jumping_onto_an_unused_cell_is_rejected() {
    let mut state = GameState::new_game();
    state.select(coord(3, 2));
    assert_eq!(
        state.select(coord(1, 2)),
        Event::Invalid(InvalidMove::DestinationOccupiedOrUnused)
    );
}
