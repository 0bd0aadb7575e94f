//! Error types for closest-pair computation.

use std::fmt;

/// Errors that can occur during closest-pair computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClosestPairError {
    /// Fewer than 2 points were supplied, so no pair exists.
    /// This is an expected outcome for 0- and 1-point inputs, not a defect.
    InsufficientPoints(usize),

    /// A coordinate is NaN or infinite. Reported before sorting begins,
    /// since the coordinate comparators are undefined on such values.
    /// `index` is the position of the first offending point in the input.
    NonFiniteCoordinate { index: usize },
}

impl fmt::Display for ClosestPairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosestPairError::InsufficientPoints(n) => {
                write!(f, "insufficient points: need at least 2, got {}", n)
            }
            ClosestPairError::NonFiniteCoordinate { index } => {
                write!(f, "non-finite coordinate at input index {}", index)
            }
        }
    }
}

impl std::error::Error for ClosestPairError {}
