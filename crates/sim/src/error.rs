use thiserror::Error;

/// Failures the simulation core can report. All are local and synchronous;
/// the core never retries anything.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbError {
    /// Action index outside the discrete set. Rejected at the boundary,
    /// never default-interpreted.
    #[error("action index {0} outside the discrete action set")]
    InvalidAction(usize),

    /// `step` called after termination without an intervening reset.
    #[error("step called on a terminated episode")]
    InvalidState,

    /// The platform buffer would exceed its fixed capacity. Fatal for the
    /// episode: capacity was sized too small for the expected climb length.
    #[error("platform buffer full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// A platform index was dereferenced out of bounds. Unreachable while
    /// the world invariants hold.
    #[error("platform index {index} out of range ({count} stored)")]
    IndexOutOfRange { index: usize, count: usize },
}
