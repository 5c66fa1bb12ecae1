extern crate alloc;

use alloc::vec::Vec;

use crate::error::{FinalizeError, PlacementError};
use crate::group::GroupLabel;
use crate::history::{RoundEntry, RoundRecord, Timestamp};
use crate::table::RankPointTable;

use super::{RoundState, ScoringEngine};

impl ScoringEngine {
    /// Opens the round numbered [`current_round`](Self::current_round) with
    /// every placement unset and a point table sized to the roster.
    ///
    /// Calling this while a round is already open re-opens the same round
    /// and discards any placements recorded so far.
    pub fn start_round(&mut self) {
        self.placements.clear();
        self.round_table = RankPointTable::descending(self.groups.len());
        self.state = RoundState::InProgress;
    }

    /// Records a placement for `label` in the open round, overwriting any
    /// previous placement for that group.
    ///
    /// Two groups may share a placement; only range and roster membership
    /// are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is open, the group is not in the
    /// roster, or the placement is outside the open round's point table.
    pub fn set_placement(
        &mut self,
        label: &GroupLabel,
        placement: u8,
    ) -> Result<(), PlacementError> {
        if self.state != RoundState::InProgress {
            return Err(PlacementError::NoOpenRound);
        }
        if !self.groups.contains(label) {
            return Err(PlacementError::UnknownGroup(label.clone()));
        }
        if !self.round_table.contains(placement) {
            return Err(PlacementError::OutOfRange {
                placement,
                limit: self.round_table.len() as u8,
            });
        }

        self.placements.insert(label.clone(), placement);
        Ok(())
    }

    /// Finalizes the open round with the current wall-clock time.
    ///
    /// # Errors
    ///
    /// See [`finalize_round_at`](Self::finalize_round_at).
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn finalize_round(&mut self) -> Result<RoundRecord, FinalizeError> {
        self.finalize_round_at(Timestamp::now())
    }

    /// Finalizes the open round, stamping its record with `now`.
    ///
    /// Awards each group the points for its placement, appends the round to
    /// the history, advances the round counter, and returns to idle. The
    /// operation is atomic: on any error nothing is mutated.
    ///
    /// Returns the appended [`RoundRecord`].
    ///
    /// # Errors
    ///
    /// Returns an error if no round is open or any group is still missing a
    /// placement; the error names the missing groups in roster order.
    pub fn finalize_round_at(&mut self, now: Timestamp) -> Result<RoundRecord, FinalizeError> {
        if self.state != RoundState::InProgress {
            return Err(FinalizeError::NoOpenRound);
        }

        // Build the full record before touching any state.
        let mut entries = Vec::with_capacity(self.groups.len());
        let mut missing = Vec::new();

        for group in &self.groups {
            match self.placements.get(group) {
                Some(&placement) => {
                    let points = self.round_table.points_for(placement).ok_or_else(|| {
                        FinalizeError::OutOfRange {
                            group: group.clone(),
                            placement,
                        }
                    })?;
                    entries.push(RoundEntry {
                        group: group.clone(),
                        placement,
                        points,
                    });
                }
                None => missing.push(group.clone()),
            }
        }

        if !missing.is_empty() {
            return Err(FinalizeError::Incomplete { missing });
        }

        entries.sort_by(|a, b| {
            a.placement
                .cmp(&b.placement)
                .then_with(|| a.group.cmp(&b.group))
        });

        // Commit.
        for entry in &entries {
            *self.totals.entry(entry.group.clone()).or_insert(0) += entry.points;
        }

        let record = RoundRecord {
            round: self.current_round,
            timestamp: now,
            entries,
        };
        self.history.push(record.clone());

        self.current_round += 1;
        self.state = RoundState::Idle;
        self.placements.clear();

        Ok(record)
    }
}
