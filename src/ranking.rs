//! Ranking computation over cumulative totals.

extern crate alloc;

use alloc::vec::Vec;

use crate::group::GroupLabel;

/// One group's position in the computed ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedGroup {
    /// The group.
    pub group: GroupLabel,
    /// The group's cumulative total score.
    pub score: u32,
    /// Competition rank: tied groups share a rank, and the group after a
    /// tie block takes its 1-based position in the sorted order.
    pub rank: u32,
}

/// Ranks `(group, score)` pairs.
///
/// Sorts by score descending, then label ascending, and assigns competition
/// ranks: scores `[10, 10, 7, 5]` yield ranks `[1, 1, 3, 4]`.
#[must_use]
pub(crate) fn rank_totals(mut totals: Vec<(GroupLabel, u32)>) -> Vec<RankedGroup> {
    totals.sort_by(|(label_a, score_a), (label_b, score_b)| {
        score_b.cmp(score_a).then_with(|| label_a.cmp(label_b))
    });

    let mut ranked = Vec::with_capacity(totals.len());
    let mut current_rank = 1;

    for (position, (group, score)) in totals.into_iter().enumerate() {
        if ranked.last().is_some_and(|prev: &RankedGroup| score < prev.score) {
            current_rank = position as u32 + 1;
        }

        ranked.push(RankedGroup {
            group,
            score,
            rank: current_rank,
        });
    }

    ranked
}
