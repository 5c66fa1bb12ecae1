//! Rank-to-point tables.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// A total mapping from placement (1-based) to points awarded.
///
/// Points are strictly decreasing as placement increases. The table used for
/// a round is derived from the roster size when the round opens: with `n`
/// groups, first place earns `n` points and last place earns 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankPointTable {
    /// Points per placement; index 0 holds the points for first place.
    points: Vec<u32>,
}

impl RankPointTable {
    /// Creates the descending table for `n` placements: `n, n-1, ..., 1`.
    ///
    /// For four groups this is the classic `{1: 4, 2: 3, 3: 2, 4: 1}`.
    #[must_use]
    pub fn descending(n: usize) -> Self {
        Self {
            points: (1..=n as u32).rev().collect(),
        }
    }

    /// Returns the points awarded for `placement`, or `None` when the
    /// placement is outside `1..=len`.
    #[must_use]
    pub fn points_for(&self, placement: u8) -> Option<u32> {
        if placement == 0 {
            return None;
        }
        self.points.get(usize::from(placement) - 1).copied()
    }

    /// Returns the highest valid placement.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the table has no placements at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns whether `placement` is within the table's range.
    #[must_use]
    pub fn contains(&self, placement: u8) -> bool {
        self.points_for(placement).is_some()
    }
}
