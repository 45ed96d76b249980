use crate::{
    cart::{
        CartLedger,
        EntryId,
    },
    catalog::{
        GameCatalog,
        GameId,
    },
    error::Result,
    grid::Toggle,
    money::{
        BrlFormatter,
        PriceFormatter,
    },
    session::GameSession,
    view::View,
};
use rand::Rng;
use tracing::{
    debug,
    info,
};

/// Wires the session and the ledger to a view. Every method handles one
/// discrete user action synchronously: the state transition either fully
/// applies (and the view is told what changed) or fails with the state
/// untouched.
pub struct App<V, R, F = BrlFormatter> {
    session: GameSession,
    cart: CartLedger,
    view: V,
    rng: R,
    formatter: F,
}

impl<V: View, R: Rng, F: PriceFormatter> App<V, R, F> {
    /// Only called once the catalog load succeeded; until then nothing else
    /// exists. Fires the initial render: selectors, the default game's grid,
    /// and an empty cart total.
    pub fn new(catalog: GameCatalog, mut view: V, rng: R, formatter: F) -> Self {
        view.on_catalog_ready(catalog.list());
        let session = GameSession::new(catalog);
        view.on_game_switched(None, session.active_game());
        let cart = CartLedger::new();
        view.on_total_changed(&cart.format_total(&formatter));
        Self {
            session,
            cart,
            view,
            rng,
            formatter,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn switch_game(&mut self, id: GameId) -> Result<()> {
        let Some(switch) = self.session.switch_to(id)? else {
            debug!(game = %id, "redundant game switch ignored");
            return Ok(());
        };
        let catalog = self.session.catalog();
        let old = catalog.get(switch.old)?;
        let new = catalog.get(switch.new)?;
        info!(from = %old.label, to = %new.label, "switched game");
        self.view.on_game_switched(Some(old), new);
        Ok(())
    }

    pub fn toggle_number(&mut self, number: u32) -> Result<()> {
        match self.session.toggle_number(number)? {
            Toggle::Selected => self.view.on_number_toggled(number, true),
            Toggle::Deselected => self.view.on_number_toggled(number, false),
            Toggle::AtLimit => debug!(number, "pick limit reached, toggle ignored"),
        }
        Ok(())
    }

    pub fn complete_randomly(&mut self) -> Result<()> {
        self.session.complete_randomly(&mut self.rng)?;
        self.view.on_selection_cleared();
        for number in self.session.selection().snapshot() {
            self.view.on_number_toggled(number, true);
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.session.clear_selection();
        self.view.on_selection_cleared();
    }

    /// Finalizes the current selection into a cart entry. The grid keeps its
    /// selection afterwards; see [`GameSession::finalize_bet`].
    pub fn add_to_cart(&mut self) -> Result<EntryId> {
        let entry = self.session.finalize_bet()?;
        info!(
            game = %entry.game,
            numbers = ?entry.numbers,
            price = entry.price.cents(),
            "bet added to cart"
        );
        let id = self.cart.add(entry.clone());
        self.view.on_entry_added(id, &entry);
        self.view
            .on_total_changed(&self.cart.format_total(&self.formatter));
        Ok(id)
    }

    pub fn remove_entry(&mut self, id: EntryId) -> Result<()> {
        let entry = self.cart.remove(id)?;
        info!(entry = %id, price = entry.price.cents(), "bet removed from cart");
        self.view.on_entry_removed(id);
        self.view
            .on_total_changed(&self.cart.format_total(&self.formatter));
        Ok(())
    }
}
