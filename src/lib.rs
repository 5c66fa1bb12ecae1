//! A round-based competition scoring engine with optional `no_std` support.
//!
//! The crate provides a [`ScoringEngine`] that manages the full round flow:
//! opening a round, recording placements for every group in the roster,
//! finalizing the round into cumulative totals and an append-only history,
//! and computing a competition-style ranking over the totals.
//!
//! # Example
//!
//! ```
//! use roundtally::{EngineOptions, ScoringEngine};
//!
//! let mut engine = ScoringEngine::new(EngineOptions::default()).unwrap();
//! engine.start_round();
//! let roster = engine.groups().to_vec();
//! for (i, label) in roster.iter().enumerate() {
//!     engine.set_placement(label, (i + 1) as u8).unwrap();
//! }
//! let record = engine.finalize_round().unwrap();
//! assert_eq!(record.round, 1);
//! assert_eq!(engine.compute_ranking()[0].rank, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod engine;
pub mod error;
pub mod group;
pub mod history;
pub mod options;
pub mod ranking;
pub mod report;
pub mod snapshot;
pub mod table;

// Re-export main types
pub use engine::{RoundState, ScoringEngine};
pub use options::EngineOptions;
pub use error::{FinalizeError, PlacementError, RosterError, SnapshotError};
pub use group::GroupLabel;
pub use history::{RoundEntry, RoundRecord, Timestamp};
pub use ranking::RankedGroup;
pub use report::{HISTORY_HEADER, HistoryRow, RANKING_HEADER, RankingRow};
pub use snapshot::Snapshot;
pub use table::RankPointTable;
