#![allow(non_snake_case)]

use lotto_cart::{
    cart::{CartEntry, CartLedger},
    catalog::GameId,
    grid::SelectionGrid,
    money::Money,
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

proptest! {
    /// No toggle sequence can ever grow the selection past the pick limit.
    #[test]
    fn toggle__selection_size_never_exceeds_max_pick(
        toggles in prop::collection::vec(1u32..=10, 0..200),
    ) {
        let mut grid = SelectionGrid::new(10);
        for number in toggles {
            grid.toggle(number, 3).unwrap();
            prop_assert!(grid.selected_count() <= 3);
        }
    }

    /// Toggling an already selected number removes it, whatever the count.
    #[test]
    fn toggle__reselecting_always_deselects(
        toggles in prop::collection::vec(1u32..=10, 0..100),
        extra in 1u32..=10,
    ) {
        let mut grid = SelectionGrid::new(10);
        for number in toggles {
            grid.toggle(number, 3).unwrap();
        }
        grid.toggle(extra, 3).unwrap();
        if grid.is_selected(extra) {
            grid.toggle(extra, 3).unwrap();
            prop_assert!(!grid.is_selected(extra));
        }
    }

    /// Exactly `max_pick` distinct numbers, all inside the grid, whenever the
    /// grid is large enough.
    #[test]
    fn random_complete__distinct_in_range(
        (grid_size, max_pick) in (1u32..=90).prop_flat_map(|s| (Just(s), 1..=s)),
        seed in any::<u64>(),
    ) {
        let mut grid = SelectionGrid::new(grid_size);
        let mut rng = StdRng::seed_from_u64(seed);
        grid.random_complete(&mut rng, max_pick).unwrap();

        let numbers = grid.snapshot();
        prop_assert_eq!(max_pick as usize, numbers.len());
        prop_assert!(numbers.iter().all(|n| (1..=grid_size).contains(n)));
        prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    /// Interleaved adds and removes keep the incremental total equal to the
    /// sum of what is actually in the cart.
    #[test]
    fn ledger__total_always_matches_entry_sum(
        prices in prop::collection::vec(0u64..=100_000, 1..40),
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..40),
    ) {
        let mut cart = CartLedger::new();
        let mut live_ids = Vec::new();
        for cents in prices {
            let id = cart.add(CartEntry {
                game: GameId::new(0),
                numbers: vec![1, 2, 3],
                price: Money::from_cents(cents),
            });
            live_ids.push(id);
        }
        for index in removals {
            if live_ids.is_empty() {
                break;
            }
            let id = live_ids.remove(index.index(live_ids.len()));
            cart.remove(id).unwrap();
        }

        let expected: Money = cart.entries().map(|(_, entry)| entry.price).sum();
        prop_assert_eq!(expected, cart.total());
    }

    /// An add followed by a remove restores the previous total exactly.
    #[test]
    fn ledger__add_remove_round_trip_is_exact(
        existing in prop::collection::vec(0u64..=100_000, 0..20),
        cents in 0u64..=100_000,
    ) {
        let mut cart = CartLedger::new();
        for price in existing {
            cart.add(CartEntry {
                game: GameId::new(0),
                numbers: vec![1, 2, 3],
                price: Money::from_cents(price),
            });
        }
        let before = cart.total();

        let id = cart.add(CartEntry {
            game: GameId::new(0),
            numbers: vec![4, 5, 6],
            price: Money::from_cents(cents),
        });
        cart.remove(id).unwrap();

        prop_assert_eq!(before, cart.total());
    }
}
