//! Tabular report rows for export collaborators.
//!
//! The engine only projects its state into typed rows; CSV quoting, byte
//! order marks, file names, and timestamp formatting belong to the caller.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::engine::ScoringEngine;
use crate::group::GroupLabel;
use crate::history::Timestamp;

/// Column headers of the ranking report.
pub const RANKING_HEADER: [&str; 3] = ["rank", "group", "total score"];

/// Column headers of the history report.
pub const HISTORY_HEADER: [&str; 5] = ["round", "timestamp", "group", "placement", "points"];

/// One row of the ranking report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRow {
    /// Competition rank.
    pub rank: u32,
    /// The group.
    pub group: GroupLabel,
    /// The group's cumulative total score.
    pub total: u32,
}

impl RankingRow {
    /// Returns the row as owned cells matching [`RANKING_HEADER`].
    #[must_use]
    pub fn cells(&self) -> [String; 3] {
        [
            self.rank.to_string(),
            self.group.to_string(),
            self.total.to_string(),
        ]
    }
}

/// One row of the history report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// The 1-based round number.
    pub round: u32,
    /// When the round was finalized.
    pub timestamp: Timestamp,
    /// The group.
    pub group: GroupLabel,
    /// The placement the group finished at.
    pub placement: u8,
    /// The points awarded for that placement.
    pub points: u32,
}

impl HistoryRow {
    /// Returns the row as owned cells matching [`HISTORY_HEADER`].
    ///
    /// The timestamp cell is epoch milliseconds; pretty formatting is the
    /// caller's concern.
    #[must_use]
    pub fn cells(&self) -> [String; 5] {
        [
            self.round.to_string(),
            self.timestamp.as_millis().to_string(),
            self.group.to_string(),
            self.placement.to_string(),
            self.points.to_string(),
        ]
    }
}

impl ScoringEngine {
    /// Projects the current ranking into report rows, in
    /// [`compute_ranking`](Self::compute_ranking) order.
    #[must_use]
    pub fn export_ranking(&self) -> Vec<RankingRow> {
        self.compute_ranking()
            .into_iter()
            .map(|ranked| RankingRow {
                rank: ranked.rank,
                group: ranked.group,
                total: ranked.score,
            })
            .collect()
    }

    /// Projects the round history into report rows: rounds ascending, rows
    /// within a round by placement ascending (then label).
    #[must_use]
    pub fn export_history(&self) -> Vec<HistoryRow> {
        self.history()
            .iter()
            .flat_map(|record| {
                record.entries.iter().map(|entry| HistoryRow {
                    round: record.round,
                    timestamp: record.timestamp,
                    group: entry.group.clone(),
                    placement: entry.placement,
                    points: entry.points,
                })
            })
            .collect()
    }
}
