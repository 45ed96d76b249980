use crate::error::{
    Error,
    Result,
};
use rand::Rng;
use rand::seq::index;
use std::collections::BTreeSet;

/// What a toggle did. Hitting the pick limit is expected interaction, not a
/// caller mistake, so it is an outcome rather than an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Toggle {
    Selected,
    Deselected,
    /// Already at the pick limit; nothing changed.
    AtLimit,
}

/// The set of picked numbers for one game, constrained to `1..=grid_size`.
/// The pick limit belongs to the active game, so the operations that enforce
/// it take `max_pick` from the caller.
#[derive(Clone, Debug, Default)]
pub struct SelectionGrid {
    grid_size: u32,
    selected: BTreeSet<u32>,
}

impl SelectionGrid {
    pub fn new(grid_size: u32) -> Self {
        Self {
            grid_size,
            selected: BTreeSet::new(),
        }
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Replaces the addressable range and clears the selection
    /// unconditionally. A resize always means a game switch, and a partial
    /// selection from another game is meaningless on the new grid.
    pub fn resize(&mut self, new_size: u32) {
        self.grid_size = new_size;
        self.selected.clear();
    }

    /// Deselection is always allowed; selection past `max_pick` is a silent
    /// no-op reported as [`Toggle::AtLimit`].
    pub fn toggle(&mut self, number: u32, max_pick: u32) -> Result<Toggle> {
        if number == 0 || number > self.grid_size {
            return Err(Error::OutOfRange {
                number,
                grid_size: self.grid_size,
            });
        }
        if self.selected.remove(&number) {
            return Ok(Toggle::Deselected);
        }
        if self.selected.len() as u32 >= max_pick {
            return Ok(Toggle::AtLimit);
        }
        self.selected.insert(number);
        Ok(Toggle::Selected)
    }

    /// Empties the selection without resizing.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Clears the current selection, then draws exactly `max_pick` distinct
    /// numbers uniformly without replacement. When the grid is too small this
    /// fails `InsufficientRange` and the selection stays empty.
    pub fn random_complete(&mut self, rng: &mut impl Rng, max_pick: u32) -> Result<()> {
        self.selected.clear();
        if max_pick > self.grid_size {
            return Err(Error::InsufficientRange {
                max_pick,
                grid_size: self.grid_size,
            });
        }
        let drawn = index::sample(rng, self.grid_size as usize, max_pick as usize);
        self.selected.extend(drawn.into_iter().map(|i| i as u32 + 1));
        Ok(())
    }

    pub fn is_complete(&self, max_pick: u32) -> bool {
        self.selected.len() as u32 == max_pick
    }

    pub fn selected_count(&self) -> u32 {
        self.selected.len() as u32
    }

    pub fn is_selected(&self, number: u32) -> bool {
        self.selected.contains(&number)
    }

    /// Sorted copy of the current selection. Does not mutate.
    pub fn snapshot(&self) -> Vec<u32> {
        self.selected.iter().copied().collect()
    }
}
