//! Engine configuration options.

extern crate alloc;

use alloc::vec::Vec;

use crate::group::GroupLabel;

/// Configuration options for a scoring engine.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use roundtally::EngineOptions;
///
/// let options = EngineOptions::default()
///     .with_groups(["Red", "Green", "Blue"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Initial roster; [`reset`](crate::ScoringEngine::reset) restores it.
    pub groups: Vec<GroupLabel>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            groups: ["A", "B", "C", "D"].into_iter().map(GroupLabel::new).collect(),
        }
    }
}

impl EngineOptions {
    /// Replaces the initial roster.
    #[must_use]
    pub fn with_groups<I, L>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<GroupLabel>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one group to the initial roster.
    #[must_use]
    pub fn with_group(mut self, label: impl Into<GroupLabel>) -> Self {
        self.groups.push(label.into());
        self
    }
}
