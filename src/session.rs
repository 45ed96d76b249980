use crate::{
    cart::CartEntry,
    catalog::{
        GameCatalog,
        GameDefinition,
        GameId,
    },
    error::{
        Error,
        Result,
    },
    grid::{
        SelectionGrid,
        Toggle,
    },
};
use rand::Rng;

/// Reported after a successful switch so the view can restyle both selector
/// controls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GameSwitch {
    pub old: GameId,
    pub new: GameId,
}

/// The single active game and its selection grid. Owns the catalog; all
/// grid operations are parameterized by the active game's constraints.
#[derive(Clone, Debug)]
pub struct GameSession {
    catalog: GameCatalog,
    active: GameId,
    selection: SelectionGrid,
}

impl GameSession {
    /// Starts on the catalog's first game with an empty selection.
    pub fn new(catalog: GameCatalog) -> Self {
        let first = catalog.default_game();
        let active = first.id;
        let selection = SelectionGrid::new(first.number_range);
        Self {
            catalog,
            active,
            selection,
        }
    }

    pub fn catalog(&self) -> &GameCatalog {
        &self.catalog
    }

    pub fn active_game(&self) -> &GameDefinition {
        // `active` always refers into the catalog; it is only ever set from a
        // successful lookup.
        &self.catalog.list()[self.active.index()]
    }

    pub fn selection(&self) -> &SelectionGrid {
        &self.selection
    }

    /// Activates `id`, resizing (and thereby clearing) the grid.
    /// Re-selecting the already active game returns `None` and leaves a
    /// partial selection untouched, so redundant clicks never lose picks.
    pub fn switch_to(&mut self, id: GameId) -> Result<Option<GameSwitch>> {
        let new_game = self.catalog.get(id)?;
        if id == self.active {
            return Ok(None);
        }
        let number_range = new_game.number_range;
        let old = self.active;
        self.active = id;
        self.selection.resize(number_range);
        Ok(Some(GameSwitch { old, new: id }))
    }

    pub fn toggle_number(&mut self, number: u32) -> Result<Toggle> {
        let max_pick = self.active_game().max_pick;
        self.selection.toggle(number, max_pick)
    }

    pub fn complete_randomly(&mut self, rng: &mut impl Rng) -> Result<()> {
        let max_pick = self.active_game().max_pick;
        self.selection.random_complete(rng, max_pick)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Builds a priced entry from the completed selection, copying the price
    /// from the active game definition. The selection is deliberately left on
    /// the grid so the same combination can be added again; only an explicit
    /// clear, a random complete, or a game switch resets it.
    pub fn finalize_bet(&self) -> Result<CartEntry> {
        let game = self.active_game();
        if !self.selection.is_complete(game.max_pick) {
            return Err(Error::IncompleteSelection {
                selected: self.selection.selected_count(),
                required: game.max_pick,
            });
        }
        Ok(CartEntry {
            game: game.id,
            numbers: self.selection.snapshot(),
            price: game.price,
        })
    }
}
