use crate::{
    error::{
        Error,
        Result,
    },
    money::Money,
};
use serde::Deserialize;
use std::{
    fmt,
    path::Path,
};

/// Index into the catalog. Ids are handed out by the catalog itself and stay
/// valid for the lifetime of the process; callers normally obtain them from
/// `GameDefinition::id`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct GameId(usize);

impl GameId {
    pub const fn new(index: usize) -> Self {
        GameId(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One game type. Immutable after load.
#[derive(Clone, Debug, PartialEq)]
pub struct GameDefinition {
    pub id: GameId,
    pub label: String,
    pub description: String,
    /// Accent token passed through to the view untouched (a hex color in the
    /// shipped data). The core never interprets it.
    pub color: String,
    /// Size of the pickable grid, numbers `1..=number_range`.
    pub number_range: u32,
    /// Exact count of numbers required to complete a bet.
    pub max_pick: u32,
    /// Cost of one completed bet of this type.
    pub price: Money,
}

/// Wire shape of the catalog document. Field names follow `games.json`.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    types: Vec<RawGame>,
}

#[derive(Debug, Deserialize)]
struct RawGame {
    #[serde(rename = "type")]
    label: String,
    description: String,
    color: String,
    range: u32,
    #[serde(rename = "max-number")]
    max_number: u32,
    price: Money,
}

/// Ordered list of game definitions, loaded once and never mutated. The
/// first entry is the default active game.
#[derive(Clone, Debug)]
pub struct GameCatalog {
    games: Vec<GameDefinition>,
}

impl GameCatalog {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::DataUnavailable {
                reason: format!("{}: {e}", path.display()),
            })?;
        Self::from_json(&raw)
    }

    pub fn from_json(document: &str) -> Result<Self> {
        let document: CatalogDocument =
            serde_json::from_str(document).map_err(|e| Error::DataUnavailable {
                reason: e.to_string(),
            })?;
        if document.types.is_empty() {
            return Err(Error::DataUnavailable {
                reason: String::from("catalog has no game types"),
            });
        }
        let mut games = Vec::with_capacity(document.types.len());
        for (index, raw) in document.types.into_iter().enumerate() {
            if raw.max_number == 0 || raw.max_number > raw.range {
                return Err(Error::DataUnavailable {
                    reason: format!(
                        "game {:?}: max-number {} must be within 1..={}",
                        raw.label, raw.max_number, raw.range
                    ),
                });
            }
            games.push(GameDefinition {
                id: GameId(index),
                label: raw.label,
                description: raw.description,
                color: raw.color,
                number_range: raw.range,
                max_pick: raw.max_number,
                price: raw.price,
            });
        }
        Ok(Self { games })
    }

    pub fn get(&self, id: GameId) -> Result<&GameDefinition> {
        self.games.get(id.0).ok_or(Error::UnknownGame(id))
    }

    /// Catalog order, for rendering selector controls.
    pub fn list(&self) -> &[GameDefinition] {
        &self.games
    }

    /// First catalog entry. Construction rejects empty catalogs, so this
    /// always exists.
    pub fn default_game(&self) -> &GameDefinition {
        &self.games[0]
    }
}
