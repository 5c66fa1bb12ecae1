//! Error types for engine operations.

extern crate alloc;

use alloc::vec::Vec;

use thiserror::Error;

use crate::group::GroupLabel;

/// Errors that can occur when changing the roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A group with this label already exists.
    #[error("group `{0}` already exists")]
    DuplicateLabel(GroupLabel),
    /// The label is empty after trimming.
    #[error("group label is empty")]
    EmptyLabel,
}

/// Errors that can occur when recording a placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// No round is open.
    #[error("no round is in progress")]
    NoOpenRound,
    /// The group is not in the active roster.
    #[error("group `{0}` is not in the roster")]
    UnknownGroup(GroupLabel),
    /// The placement is outside the open round's point table.
    #[error("placement {placement} is out of range (1..={limit})")]
    OutOfRange {
        /// The rejected placement.
        placement: u8,
        /// The highest valid placement for the open round.
        limit: u8,
    },
}

/// Errors that can occur when finalizing a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinalizeError {
    /// No round is open.
    #[error("no round is in progress")]
    NoOpenRound,
    /// One or more groups have no placement yet.
    #[error("{} group(s) have no placement", missing.len())]
    Incomplete {
        /// Groups still missing a placement, in roster order.
        missing: Vec<GroupLabel>,
    },
    /// A recorded placement fell outside the round's point table.
    ///
    /// Placements are validated against the table when they are set and the
    /// table never shrinks while a round is open, so this guards an internal
    /// invariant rather than a reachable caller mistake.
    #[error("group `{group}` has out-of-range placement {placement}")]
    OutOfRange {
        /// The offending group.
        group: GroupLabel,
        /// The out-of-range placement.
        placement: u8,
    },
}

/// Errors that can occur when restoring an engine from a [`Snapshot`].
///
/// [`Snapshot`]: crate::snapshot::Snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The stored round number is zero (rounds are numbered from 1).
    #[error("current round number is zero")]
    ZeroRound,
    /// The stored roster contains the same label twice.
    #[error("snapshot roster contains `{0}` twice")]
    DuplicateGroup(GroupLabel),
    /// A totals or placement entry references a label outside the roster.
    #[error("snapshot references unknown group `{0}`")]
    UnknownGroup(GroupLabel),
    /// A stored placement is outside the range implied by the roster size.
    #[error("stored placement {placement} for `{group}` is out of range (1..={limit})")]
    PlacementOutOfRange {
        /// The offending group.
        group: GroupLabel,
        /// The stored placement.
        placement: u8,
        /// The highest valid placement for the stored roster.
        limit: u8,
    },
}
