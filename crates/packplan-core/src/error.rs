//! Error types for packplan.

use thiserror::Error;

/// Failure modes of the pack-combination solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackPlanError {
    /// The catalog contains no pack sizes.
    #[error("no pack sizes provided")]
    EmptyCatalog,

    /// The requested quantity is zero.
    #[error("target quantity must be positive")]
    InvalidTarget,

    /// No feasible combination covered the target. Unreachable for a
    /// non-empty catalog of positive sizes; signals a violated precondition
    /// rather than a normal user-facing failure.
    #[error("could not find a valid combination for target {target}")]
    NoSolution { target: u64 },
}

/// Result type alias for packplan operations.
pub type Result<T> = std::result::Result<T, PackPlanError>;
