//! Round lifecycle state.

/// Round lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round is open; `current_round` numbers the round about to start.
    Idle,
    /// A round is open and accepting placements.
    InProgress,
}
