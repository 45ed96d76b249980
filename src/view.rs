use crate::{
    cart::{
        CartEntry,
        EntryId,
    },
    catalog::GameDefinition,
};

/// Render boundary. The controller calls these after each completed state
/// transition; an implementation maps the ids to whatever it draws with. The
/// core never holds renderable handles itself.
pub trait View {
    /// Catalog loaded; render one selector control per game, in catalog
    /// order.
    fn on_catalog_ready(&mut self, games: &[GameDefinition]);

    /// Restyle both selector controls, regenerate the grid with
    /// `new.number_range` cells, update the description text. `old` is `None`
    /// only for the initial activation right after load.
    fn on_game_switched(&mut self, old: Option<&GameDefinition>, new: &GameDefinition);

    /// Restyle a single cell.
    fn on_number_toggled(&mut self, number: u32, selected: bool);

    /// Restyle every cell to the unselected state.
    fn on_selection_cleared(&mut self);

    fn on_entry_added(&mut self, id: EntryId, entry: &CartEntry);

    fn on_entry_removed(&mut self, id: EntryId);

    fn on_total_changed(&mut self, formatted_total: &str);
}
