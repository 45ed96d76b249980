use crate::{
    cart::EntryId,
    catalog::GameId,
};
use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything here except `DataUnavailable` is local and recoverable; a
/// failed operation leaves the state exactly as it was.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog could not be fetched or parsed. Fatal to initialization;
    /// nothing is constructed on top of a missing catalog.
    #[error("game catalog unavailable: {reason}")]
    DataUnavailable { reason: String },

    /// Caller passed a stale or invalid game reference.
    #[error("unknown game {0}")]
    UnknownGame(GameId),

    /// Caller passed a stale or invalid cart entry reference.
    #[error("unknown cart entry {0}")]
    UnknownEntry(EntryId),

    /// Number outside the active grid. A correctly wired view never produces
    /// this; it fails loudly instead of corrupting the selection.
    #[error("number {number} is outside the grid 1..={grid_size}")]
    OutOfRange { number: u32, grid_size: u32 },

    /// Finalize was attempted before the pick count was satisfied.
    #[error("selection incomplete: {selected} of {required} numbers picked")]
    IncompleteSelection { selected: u32, required: u32 },

    /// A random complete cannot draw enough distinct numbers. Only reachable
    /// with inconsistent catalog data.
    #[error("cannot draw {max_pick} distinct numbers from a grid of {grid_size}")]
    InsufficientRange { max_pick: u32, grid_size: u32 },
}
