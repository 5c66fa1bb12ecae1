extern crate alloc;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::SnapshotError;
use crate::options::EngineOptions;
use crate::snapshot::Snapshot;
use crate::table::RankPointTable;

use super::{RoundState, ScoringEngine};

impl ScoringEngine {
    /// Captures the complete engine state as a serializable record.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let total_scores = self
            .groups
            .iter()
            .map(|group| (group.clone(), self.totals.get(group).copied().unwrap_or(0)))
            .collect();

        let current_round_data = self
            .groups
            .iter()
            .filter_map(|group| {
                self.placements
                    .get(group)
                    .map(|&placement| (group.clone(), placement))
            })
            .collect();

        Snapshot {
            groups: self.groups.clone(),
            current_round: self.current_round,
            round_history: self.history.clone(),
            total_scores,
            is_round_in_progress: self.state == RoundState::InProgress,
            current_round_data,
        }
    }

    /// Rebuilds an engine from a snapshot.
    ///
    /// `options` supplies the initial roster that [`reset`](Self::reset)
    /// restores; the snapshot supplies everything else. Groups missing a
    /// totals pair restore to zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the round number is zero, the roster contains a
    /// duplicate label, a totals or placement pair references a group
    /// outside the roster, or a stored placement exceeds the roster size.
    pub fn from_snapshot(
        options: EngineOptions,
        snapshot: Snapshot,
    ) -> Result<Self, SnapshotError> {
        if snapshot.current_round == 0 {
            return Err(SnapshotError::ZeroRound);
        }

        let groups = snapshot.groups;
        for (index, label) in groups.iter().enumerate() {
            if groups[..index].contains(label) {
                return Err(SnapshotError::DuplicateGroup(label.clone()));
            }
        }

        let mut totals: HashMap<_, _> = groups.iter().map(|label| (label.clone(), 0)).collect();
        for (label, points) in snapshot.total_scores {
            if !groups.contains(&label) {
                return Err(SnapshotError::UnknownGroup(label));
            }
            totals.insert(label, points);
        }

        let limit = groups.len() as u8;
        let mut placements = HashMap::new();
        for (label, placement) in snapshot.current_round_data {
            if !groups.contains(&label) {
                return Err(SnapshotError::UnknownGroup(label));
            }
            if placement == 0 || placement > limit {
                return Err(SnapshotError::PlacementOutOfRange {
                    group: label,
                    placement,
                    limit,
                });
            }
            placements.insert(label, placement);
        }

        let (state, round_table) = if snapshot.is_round_in_progress {
            (
                RoundState::InProgress,
                RankPointTable::descending(groups.len()),
            )
        } else {
            // Stale placement pairs from before a finalize carry no meaning.
            placements.clear();
            (RoundState::Idle, RankPointTable::descending(0))
        };

        Ok(Self {
            options,
            groups,
            current_round: snapshot.current_round,
            state,
            round_table,
            placements,
            totals,
            history: snapshot.round_history,
        })
    }
}
