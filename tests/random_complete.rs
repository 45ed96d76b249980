#![allow(non_snake_case)]

use lotto_cart::{
    Error,
    grid::SelectionGrid,
    session::GameSession,
    test_helpers::single_game_catalog,
};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn random_complete__draws_exactly_max_pick_distinct_numbers_in_range() {
    // given
    let mut grid = SelectionGrid::new(60);
    let mut rng = StdRng::seed_from_u64(7);

    // when
    grid.random_complete(&mut rng, 6).unwrap();

    // then
    let numbers = grid.snapshot();
    assert_eq!(6, numbers.len());
    assert!(numbers.iter().all(|n| (1..=60).contains(n)));
    // snapshot is sorted, so adjacent equality would reveal a duplicate
    assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    assert!(grid.is_complete(6));
}

#[test]
fn random_complete__replaces_existing_selection() {
    // given
    let mut grid = SelectionGrid::new(10);
    let mut rng = StdRng::seed_from_u64(3);
    for n in [1, 2, 3] {
        grid.toggle(n, 3).unwrap();
    }

    // when
    grid.random_complete(&mut rng, 3).unwrap();

    // then
    assert_eq!(3, grid.snapshot().len());
}

#[test]
fn random_complete__full_grid_draw_selects_every_number() {
    // given
    let mut grid = SelectionGrid::new(5);
    let mut rng = StdRng::seed_from_u64(11);

    // when
    grid.random_complete(&mut rng, 5).unwrap();

    // then
    assert_eq!(vec![1, 2, 3, 4, 5], grid.snapshot());
}

#[test]
fn random_complete__insufficient_range_fails_leaving_nothing_selected() {
    // given
    let mut grid = SelectionGrid::new(4);
    let mut rng = StdRng::seed_from_u64(5);
    grid.toggle(1, 5).unwrap();

    // when
    let result = grid.random_complete(&mut rng, 5);

    // then
    assert!(matches!(
        result,
        Err(Error::InsufficientRange {
            max_pick: 5,
            grid_size: 4
        })
    ));
    assert!(grid.snapshot().is_empty());
}

#[test]
fn complete_randomly__session_uses_active_game_pick_count() {
    // given
    let mut session = GameSession::new(single_game_catalog(25, 15, 2.5));
    let mut rng = StdRng::seed_from_u64(1);

    // when
    session.complete_randomly(&mut rng).unwrap();

    // then
    let numbers = session.selection().snapshot();
    assert_eq!(15, numbers.len());
    assert!(numbers.iter().all(|n| (1..=25).contains(n)));
}

#[test]
fn random_complete__seeded_runs_are_reproducible() {
    // given
    let mut first = SelectionGrid::new(80);
    let mut second = SelectionGrid::new(80);

    // when
    first
        .random_complete(&mut StdRng::seed_from_u64(42), 5)
        .unwrap();
    second
        .random_complete(&mut StdRng::seed_from_u64(42), 5)
        .unwrap();

    // then
    assert_eq!(first.snapshot(), second.snapshot());
}
