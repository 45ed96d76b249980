use crate::{
    catalog::GameId,
    error::{
        Error,
        Result,
    },
    money::{
        Money,
        PriceFormatter,
    },
};
use std::fmt;

/// Removal handle issued by [`CartLedger::add`]. Ids are never reused, so a
/// handle that survived a removal fails `UnknownEntry` instead of aliasing a
/// later entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One priced bet. Immutable once created; the price was copied from the game
/// definition at finalize time, so later catalog edits cannot drift the cart
/// total.
#[derive(Clone, Debug, PartialEq)]
pub struct CartEntry {
    pub game: GameId,
    /// The finalized selection, sorted ascending, exactly the game's pick
    /// count long.
    pub numbers: Vec<u32>,
    pub price: Money,
}

/// Ordered bet entries plus their running total, kept in lockstep: the total
/// is adjusted incrementally on add/remove and never recomputed by summation,
/// so reads are O(1).
#[derive(Debug, Default)]
pub struct CartLedger {
    entries: Vec<(EntryId, CartEntry)>,
    total: Money,
    next_id: u64,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends at the end; insertion order is display and removal order.
    /// There is no upper bound on entries.
    pub fn add(&mut self, entry: CartEntry) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.total += entry.price;
        self.entries.push((id, entry));
        id
    }

    /// Subtracts the entry's own stored price, not the current catalog price.
    pub fn remove(&mut self, id: EntryId) -> Result<CartEntry> {
        let position = self
            .entries
            .iter()
            .position(|(entry_id, _)| *entry_id == id)
            .ok_or(Error::UnknownEntry(id))?;
        let (_, entry) = self.entries.remove(position);
        self.total -= entry.price;
        Ok(entry)
    }

    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &CartEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Locale and currency policy live in the formatting collaborator.
    pub fn format_total(&self, formatter: &impl PriceFormatter) -> String {
        formatter.format(self.total)
    }
}
