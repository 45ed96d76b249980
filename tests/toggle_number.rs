#![allow(non_snake_case)]

use lotto_cart::{
    Error,
    grid::{SelectionGrid, Toggle},
    session::GameSession,
    test_helpers::single_game_catalog,
};

#[test]
fn toggle__selects_number() {
    // given
    let mut grid = SelectionGrid::new(10);

    // when
    let outcome = grid.toggle(4, 3).unwrap();

    // then
    assert_eq!(Toggle::Selected, outcome);
    assert!(grid.is_selected(4));
    assert_eq!(vec![4], grid.snapshot());
}

#[test]
fn toggle__deselects_selected_number() {
    // given
    let mut grid = SelectionGrid::new(10);
    grid.toggle(4, 3).unwrap();

    // when
    let outcome = grid.toggle(4, 3).unwrap();

    // then
    assert_eq!(Toggle::Deselected, outcome);
    assert!(grid.snapshot().is_empty());
}

#[test]
fn toggle__selection_past_limit_is_silent_noop() {
    // given
    let mut grid = SelectionGrid::new(10);
    for n in [1, 2, 3] {
        grid.toggle(n, 3).unwrap();
    }

    // when
    let outcome = grid.toggle(4, 3).unwrap();

    // then
    assert_eq!(Toggle::AtLimit, outcome);
    assert_eq!(vec![1, 2, 3], grid.snapshot());
}

#[test]
fn toggle__deselection_is_allowed_at_limit() {
    // given
    let mut grid = SelectionGrid::new(10);
    for n in [1, 2, 3] {
        grid.toggle(n, 3).unwrap();
    }

    // when
    let outcome = grid.toggle(2, 3).unwrap();

    // then
    assert_eq!(Toggle::Deselected, outcome);
    assert_eq!(vec![1, 3], grid.snapshot());
}

/// At the limit a new pick is ignored; freeing a slot re-enables it.
#[test]
fn toggle__limit_frees_up_after_deselection() {
    // given
    let mut grid = SelectionGrid::new(10);
    for n in [1, 2, 3] {
        grid.toggle(n, 3).unwrap();
    }

    // when / then
    assert_eq!(Toggle::AtLimit, grid.toggle(4, 3).unwrap());
    assert_eq!(vec![1, 2, 3], grid.snapshot());

    assert_eq!(Toggle::Deselected, grid.toggle(2, 3).unwrap());
    assert_eq!(vec![1, 3], grid.snapshot());

    assert_eq!(Toggle::Selected, grid.toggle(4, 3).unwrap());
    assert_eq!(vec![1, 3, 4], grid.snapshot());
}

#[test]
fn toggle__zero_is_out_of_range() {
    // given
    let mut grid = SelectionGrid::new(10);

    // when
    let result = grid.toggle(0, 3);

    // then
    assert!(matches!(
        result,
        Err(Error::OutOfRange {
            number: 0,
            grid_size: 10
        })
    ));
}

#[test]
fn toggle__past_grid_size_is_out_of_range_and_changes_nothing() {
    // given
    let mut grid = SelectionGrid::new(10);
    grid.toggle(1, 3).unwrap();

    // when
    let result = grid.toggle(11, 3);

    // then
    assert!(matches!(
        result,
        Err(Error::OutOfRange {
            number: 11,
            grid_size: 10
        })
    ));
    assert_eq!(vec![1], grid.snapshot());
}

#[test]
fn clear__empties_selection_without_resizing() {
    // given
    let mut grid = SelectionGrid::new(10);
    grid.toggle(1, 3).unwrap();
    grid.toggle(9, 3).unwrap();

    // when
    grid.clear();

    // then
    assert!(grid.snapshot().is_empty());
    assert_eq!(10, grid.grid_size());
}

#[test]
fn is_complete__true_exactly_at_pick_count() {
    // given
    let mut grid = SelectionGrid::new(10);

    // when / then
    assert!(!grid.is_complete(3));
    grid.toggle(1, 3).unwrap();
    grid.toggle(2, 3).unwrap();
    assert!(!grid.is_complete(3));
    grid.toggle(3, 3).unwrap();
    assert!(grid.is_complete(3));
}

#[test]
fn toggle_number__session_applies_active_game_limit() {
    // given
    let mut session = GameSession::new(single_game_catalog(10, 3, 1.0));
    for n in [1, 2, 3] {
        assert_eq!(Toggle::Selected, session.toggle_number(n).unwrap());
    }

    // when
    let outcome = session.toggle_number(4).unwrap();

    // then
    assert_eq!(Toggle::AtLimit, outcome);
    assert_eq!(vec![1, 2, 3], session.selection().snapshot());
}
