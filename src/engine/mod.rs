//! Scoring engine and state management.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::RosterError;
use crate::group::GroupLabel;
use crate::history::RoundRecord;
use crate::options::EngineOptions;
use crate::ranking::{RankedGroup, rank_totals};
use crate::table::RankPointTable;

mod persist;
mod round;
pub mod state;

pub use state::RoundState;

/// A scoring engine that manages the roster, round flow, cumulative totals,
/// and round history.
///
/// The engine is an owned value mutated through `&mut self`; it is meant to
/// be held by a presentation layer that serializes user-driven calls. All
/// queries are pure and side-effect free. Persistence happens through
/// [`snapshot`](Self::snapshot) / [`from_snapshot`](Self::from_snapshot) and
/// is entirely the caller's concern: a failed save never touches engine
/// state.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    /// Configuration the engine was created with; `reset` restores it.
    options: EngineOptions,
    /// Active roster, in join order.
    groups: Vec<GroupLabel>,
    /// Number of the open round, or of the round about to start.
    current_round: u32,
    /// Round lifecycle state.
    state: RoundState,
    /// Point table for the open round, sized to the roster at round start.
    round_table: RankPointTable,
    /// Placements recorded for the open round; absent entries are unset.
    placements: HashMap<GroupLabel, u8>,
    /// Cumulative totals (`group` -> points ever awarded).
    totals: HashMap<GroupLabel, u32>,
    /// Finalized rounds, oldest first.
    history: Vec<RoundRecord>,
}

impl ScoringEngine {
    /// Creates an engine with the configured initial roster, zero totals,
    /// empty history, and round 1 not yet started.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured roster contains an empty or
    /// duplicate label.
    pub fn new(options: EngineOptions) -> Result<Self, RosterError> {
        let groups = options.groups.clone();
        validate_roster(&groups)?;

        let totals = groups.iter().map(|label| (label.clone(), 0)).collect();

        Ok(Self {
            options,
            groups,
            current_round: 1,
            state: RoundState::Idle,
            round_table: RankPointTable::descending(0),
            placements: HashMap::new(),
            totals,
            history: Vec::new(),
        })
    }

    /// Appends a new group with a zero total.
    ///
    /// If a round is open, the group joins it with no placement set and the
    /// open round's point table is re-derived for the grown roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty or already in the roster.
    pub fn add_group(&mut self, label: impl Into<GroupLabel>) -> Result<(), RosterError> {
        let label = label.into();
        if label.is_empty() {
            return Err(RosterError::EmptyLabel);
        }
        if self.groups.contains(&label) {
            return Err(RosterError::DuplicateLabel(label));
        }

        self.totals.insert(label.clone(), 0);
        self.groups.push(label);

        if self.state == RoundState::InProgress {
            self.round_table = RankPointTable::descending(self.groups.len());
        }

        Ok(())
    }

    /// Returns the next unused label of the auto-naming sequence
    /// (A, B, ..., Z, AA, ...), for presenters that add unnamed groups.
    #[must_use]
    pub fn next_auto_label(&self) -> GroupLabel {
        let mut index = self.groups.len();
        loop {
            let candidate = GroupLabel::nth(index);
            if !self.groups.contains(&candidate) {
                return candidate;
            }
            index += 1;
        }
    }

    /// Restores the initial roster, zeroes all totals, clears the history,
    /// and returns to round 1 not yet started.
    ///
    /// This is the only way to shrink the roster or clear the history.
    pub fn reset(&mut self) {
        self.groups = self.options.groups.clone();
        self.totals = self
            .groups
            .iter()
            .map(|label| (label.clone(), 0))
            .collect();
        self.current_round = 1;
        self.state = RoundState::Idle;
        self.round_table = RankPointTable::descending(0);
        self.placements.clear();
        self.history.clear();
    }

    /// Computes the current ranking: total score descending, ties broken by
    /// label ascending, competition-style rank numbers.
    #[must_use]
    pub fn compute_ranking(&self) -> Vec<RankedGroup> {
        let totals = self
            .groups
            .iter()
            .map(|label| (label.clone(), self.total(label).unwrap_or(0)))
            .collect();
        rank_totals(totals)
    }

    /// Returns the current round lifecycle state.
    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the number of the open round, or of the round about to start.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Returns the active roster in join order.
    #[must_use]
    pub fn groups(&self) -> &[GroupLabel] {
        &self.groups
    }

    /// Returns the cumulative total for `label`, or `None` for an unknown
    /// group.
    #[must_use]
    pub fn total(&self, label: &GroupLabel) -> Option<u32> {
        self.totals.get(label).copied()
    }

    /// Returns the placement recorded for `label` in the open round.
    ///
    /// Returns `None` when no round is open, the group is unknown, or the
    /// placement is still unset.
    #[must_use]
    pub fn placement(&self, label: &GroupLabel) -> Option<u8> {
        if self.state != RoundState::InProgress {
            return None;
        }
        self.placements.get(label).copied()
    }

    /// Returns the groups still missing a placement in the open round, in
    /// roster order. Empty when no round is open.
    #[must_use]
    pub fn missing_placements(&self) -> Vec<GroupLabel> {
        if self.state != RoundState::InProgress {
            return Vec::new();
        }
        self.groups
            .iter()
            .filter(|label| !self.placements.contains_key(*label))
            .cloned()
            .collect()
    }

    /// Returns the point table of the open round, or `None` while idle.
    #[must_use]
    pub fn round_table(&self) -> Option<&RankPointTable> {
        match self.state {
            RoundState::InProgress => Some(&self.round_table),
            RoundState::Idle => None,
        }
    }

    /// Returns the finalized rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }
}

fn validate_roster(groups: &[GroupLabel]) -> Result<(), RosterError> {
    for (index, label) in groups.iter().enumerate() {
        if label.is_empty() {
            return Err(RosterError::EmptyLabel);
        }
        if groups[..index].contains(label) {
            return Err(RosterError::DuplicateLabel(label.clone()));
        }
    }
    Ok(())
}
