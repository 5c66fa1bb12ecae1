//! Round history records.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::group::GroupLabel;

/// An opaque, comparable point in time attached to a finalized round.
///
/// Internally milliseconds since the Unix epoch. Rendering it for display is
/// the export collaborator's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a timestamp from milliseconds since the Unix epoch.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as milliseconds since the Unix epoch.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Captures the current wall-clock time.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn now() -> Self {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        Self(millis)
    }
}

/// One group's outcome within a finalized round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEntry {
    /// The group.
    pub group: GroupLabel,
    /// The placement the group finished at.
    pub placement: u8,
    /// The points awarded for that placement.
    pub points: u32,
}

/// A finalized round, immutable once appended to the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// The 1-based round number.
    pub round: u32,
    /// When the round was finalized.
    pub timestamp: Timestamp,
    /// Per-group outcomes, sorted by placement then label.
    pub entries: Vec<RoundEntry>,
}

impl RoundRecord {
    /// Returns the entry for `group`, if it participated in this round.
    #[must_use]
    pub fn entry(&self, group: &GroupLabel) -> Option<&RoundEntry> {
        self.entries.iter().find(|entry| entry.group == *group)
    }
}
