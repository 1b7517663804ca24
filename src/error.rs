//! Error type for ANOVA computations.

use thiserror::Error;

/// Reasons an ANOVA cannot be computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnovaError {
    /// Too few groups, or no residual degrees of freedom (N - k must be positive).
    #[error("insufficient data: {groups} group(s) with {observations} observation(s); need at least 2 groups and more observations than groups")]
    InsufficientData {
        /// Number of groups supplied.
        groups: usize,
        /// Total number of observations across all groups.
        observations: usize,
    },

    /// Both between-group and within-group variation are zero, so F = 0/0.
    #[error("degenerate input: every observation is identical, F is undefined")]
    DegenerateInput,

    /// A group contains no observations.
    #[error("group {group} is empty")]
    EmptyGroup {
        /// Index of the empty group.
        group: usize,
    },

    /// A value is NaN or infinite.
    #[error("non-finite value at group {group}, index {index}")]
    NonFiniteValue {
        /// Index of the group containing the value.
        group: usize,
        /// Position of the value within its group.
        index: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnovaError>;
