//! Persisted engine state.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::group::GroupLabel;
use crate::history::RoundRecord;

/// A serializable snapshot of complete engine state.
///
/// Produced by [`ScoringEngine::snapshot`] and consumed by
/// [`ScoringEngine::from_snapshot`]. How the record is stored is entirely
/// the persistence collaborator's concern; field names follow the camelCase
/// keys of the historical persisted JSON.
///
/// [`ScoringEngine::snapshot`]: crate::ScoringEngine::snapshot
/// [`ScoringEngine::from_snapshot`]: crate::ScoringEngine::from_snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Active roster, in join order.
    pub groups: Vec<GroupLabel>,
    /// Number of the open round, or of the round about to start.
    pub current_round: u32,
    /// Finalized rounds, oldest first.
    pub round_history: Vec<RoundRecord>,
    /// Cumulative totals as `(group, points)` pairs, in roster order.
    /// Groups without a pair restore to zero.
    pub total_scores: Vec<(GroupLabel, u32)>,
    /// Whether a round was open when the snapshot was taken.
    pub is_round_in_progress: bool,
    /// Placements of the open round as `(group, placement)` pairs, in
    /// roster order; groups with no placement yet are omitted.
    pub current_round_data: Vec<(GroupLabel, u8)>,
}
