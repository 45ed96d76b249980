use crate::{
    cart::{
        CartEntry,
        EntryId,
    },
    catalog::{
        GameCatalog,
        GameDefinition,
        GameId,
    },
    view::View,
};

/// The shipped three-game catalog document.
pub const SAMPLE_CATALOG_JSON: &str = r##"{
  "types": [
    {
      "type": "Lotofácil",
      "description": "Escolha 15 números para concorrer a prêmios. Acerte 11, 12, 13, 14 ou 15 números e ganhe.",
      "color": "#7F3992",
      "range": 25,
      "max-number": 15,
      "price": 2.5
    },
    {
      "type": "Mega-Sena",
      "description": "Escolha 6 números dos 60 disponíveis na Mega-Sena. Ganhe com 4, 5 ou 6 acertos.",
      "color": "#01AC66",
      "range": 60,
      "max-number": 6,
      "price": 4.5
    },
    {
      "type": "Quina",
      "description": "Escolha de 5 números para apostar na Quina. Acerte 2, 3, 4 ou 5 números e ganhe.",
      "color": "#F79C31",
      "range": 80,
      "max-number": 5,
      "price": 2
    }
  ]
}"##;

pub fn sample_catalog() -> GameCatalog {
    GameCatalog::from_json(SAMPLE_CATALOG_JSON).unwrap()
}

/// A one-game catalog for exercising grid constraints with small numbers.
pub fn single_game_catalog(range: u32, max_pick: u32, price: f64) -> GameCatalog {
    let document = serde_json::json!({
        "types": [{
            "type": "Test Game",
            "description": "test game",
            "color": "#123456",
            "range": range,
            "max-number": max_pick,
            "price": price,
        }]
    });
    GameCatalog::from_json(&document.to_string()).unwrap()
}

/// What a [`View`] was told, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewCall {
    CatalogReady(Vec<GameId>),
    GameSwitched {
        old: Option<GameId>,
        new: GameId,
    },
    NumberToggled {
        number: u32,
        selected: bool,
    },
    SelectionCleared,
    EntryAdded(EntryId, CartEntry),
    EntryRemoved(EntryId),
    TotalChanged(String),
}

/// Records every callback so tests can assert on the exact render commands a
/// transition produced.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_calls(&mut self) -> Vec<ViewCall> {
        std::mem::take(&mut self.calls)
    }
}

impl View for RecordingView {
    fn on_catalog_ready(&mut self, games: &[GameDefinition]) {
        self.calls
            .push(ViewCall::CatalogReady(games.iter().map(|g| g.id).collect()));
    }

    fn on_game_switched(&mut self, old: Option<&GameDefinition>, new: &GameDefinition) {
        self.calls.push(ViewCall::GameSwitched {
            old: old.map(|g| g.id),
            new: new.id,
        });
    }

    fn on_number_toggled(&mut self, number: u32, selected: bool) {
        self.calls.push(ViewCall::NumberToggled { number, selected });
    }

    fn on_selection_cleared(&mut self) {
        self.calls.push(ViewCall::SelectionCleared);
    }

    fn on_entry_added(&mut self, id: EntryId, entry: &CartEntry) {
        self.calls.push(ViewCall::EntryAdded(id, entry.clone()));
    }

    fn on_entry_removed(&mut self, id: EntryId) {
        self.calls.push(ViewCall::EntryRemoved(id));
    }

    fn on_total_changed(&mut self, formatted_total: &str) {
        self.calls
            .push(ViewCall::TotalChanged(formatted_total.to_string()));
    }
}
